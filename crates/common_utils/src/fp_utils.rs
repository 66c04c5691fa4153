//! Functional programming utilities

/// Run `f` when `predicate` holds, otherwise succeed.
#[inline]
pub fn when<W, E>(predicate: bool, f: W) -> Result<(), E>
where
    W: FnOnce() -> Result<(), E>,
{
    if predicate {
        f()
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::when;

    #[test]
    fn runs_only_when_predicate_holds() {
        assert_eq!(when(false, || Err::<(), _>("skipped")), Ok(()));
        assert_eq!(when(true, || Err::<(), _>("ran")), Err("ran"));
    }
}
