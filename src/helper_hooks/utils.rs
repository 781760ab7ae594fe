use crate::prelude::*;

use crate::utils::CCStr;

pub type LResult<T> = Option<Result<T, CCStr>>;
pub type FResource<T> = Resource<Result<T, CCStr>>;

pub trait LoadableFaillibleMapper<T> {
    fn lrmap<R, F: FnOnce(&T) -> R>(&self, f: F) -> LResult<R>;
    fn lrmap_ok<R, F: FnOnce(&T) -> R>(&self, f: F) -> Option<R> {
        self.lrmap(f).and_then(Result::ok)
    }
}
impl<T> LoadableFaillibleMapper<T> for FResource<T> {
    fn lrmap<R, F: FnOnce(&T) -> R>(&self, f: F) -> LResult<R> {
        self.read()
            .as_ref()
            .map(|inner_result| inner_result.as_ref().map(f).map_err(Clone::clone))
    }
}
