use crate::error::{BenchError, Result};
use std::fmt;
use std::hint::black_box;

/// A named unit of benchmark work, invoked `repeat_count` times per run.
///
/// The operation may return anything; its result is passed through
/// `black_box` and dropped so the work is not optimised away.
pub struct NamedTest<'a> {
    name: String,
    repeat_count: u32,
    operation: Box<dyn Fn() + 'a>,
}

impl<'a> NamedTest<'a> {
    pub fn new<F, T>(name: impl Into<String>, repeat_count: u32, operation: F) -> Result<Self>
    where
        F: Fn() -> T + 'a,
    {
        let name = name.into();
        if repeat_count == 0 {
            return Err(BenchError::InvalidRepeatCount { name });
        }

        Ok(Self {
            name,
            repeat_count,
            operation: Box::new(move || {
                black_box(operation());
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    /// Run the operation once
    pub fn invoke(&self) {
        (self.operation)()
    }
}

impl fmt::Debug for NamedTest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedTest")
            .field("name", &self.name)
            .field("repeat_count", &self.repeat_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_zero_repeat_count_is_rejected() {
        let result = NamedTest::new("never", 0, || 1);
        match result {
            Err(BenchError::InvalidRepeatCount { name }) => assert_eq!(name, "never"),
            other => panic!("expected InvalidRepeatCount, got {:?}", other),
        }
    }

    #[test]
    fn test_invoke_runs_operation_once() {
        let calls = Cell::new(0);
        let test = NamedTest::new("count", 3, || calls.set(calls.get() + 1)).unwrap();

        test.invoke();
        test.invoke();

        assert_eq!(calls.get(), 2);
        assert_eq!(test.name(), "count");
        assert_eq!(test.repeat_count(), 3);
    }

    #[test]
    fn test_operation_may_borrow_data() {
        let data = vec![3, 1, 2];
        let test = NamedTest::new("sum", 1, || data.iter().sum::<i32>()).unwrap();
        test.invoke();
        assert!(format!("{:?}", test).contains("sum"));
    }
}
