use crate::FluentList;
use anyhow::{Context, Result};

impl<T> FluentList<T> {
    /// Fallible [`map`](FluentList::map): stops at the first error, which is
    /// returned with the failing index attached as context.
    pub fn try_map<R, F>(self, f: F) -> Result<FluentList<R>>
    where
        F: Fn(&T) -> Result<R>,
    {
        let mut out = Vec::with_capacity(self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            out.push(f(item).with_context(|| format!("element {i} failed"))?);
        }
        Ok(FluentList::from_vec(out))
    }

    /// Fallible [`for_each_item`](FluentList::for_each_item), fail-fast.
    pub fn try_for_each_item<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(&T) -> Result<()>,
    {
        for (i, item) in self.items.iter().enumerate() {
            f(item).with_context(|| format!("element {i} failed"))?;
        }
        Ok(())
    }
}

impl<T, E> FluentList<std::result::Result<T, E>>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Unwrap a list of results, failing on the first `Err`.
    pub fn collect_fail_fast(self) -> Result<FluentList<T>> {
        let mut ok = Vec::with_capacity(self.items.len());
        for (i, r) in self.items.into_iter().enumerate() {
            ok.push(r.with_context(|| format!("element {i} failed"))?);
        }
        Ok(FluentList::from_vec(ok))
    }
}
