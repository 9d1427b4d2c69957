use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The calculator's numeric storage cells.
///
/// `Registers` holds the memory cell and the last successful answer. Both
/// start at zero and always hold a finite number: the setters refuse
/// infinities and NaN, and the session only stores the result of an
/// evaluation after it succeeded.
///
/// The evaluator borrows registers read-only; all writes go through a
/// `&mut Registers`, so there is exactly one writer at a time.
///
/// ## Example
/// ```
/// use calcrs::interpreter::registers::Registers;
///
/// let mut registers = Registers::new();
/// registers.set_memory(7.0).unwrap();
/// assert_eq!(registers.memory(), 7.0);
///
/// registers.clear_memory();
/// assert_eq!(registers.memory(), 0.0);
///
/// assert!(registers.set_last_answer(f64::NAN).is_err());
/// assert_eq!(registers.last_answer(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Registers {
    memory:      f64,
    last_answer: f64,
}

impl Registers {
    /// Creates registers with memory and last answer set to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { memory:      0.0,
               last_answer: 0.0, }
    }

    /// Returns the memory register.
    #[must_use]
    pub const fn memory(&self) -> f64 {
        self.memory
    }

    /// Returns the last-answer register.
    #[must_use]
    pub const fn last_answer(&self) -> f64 {
        self.last_answer
    }

    /// Stores `value` in memory.
    ///
    /// # Errors
    /// `NonFiniteRegister` if `value` is not finite; memory is unchanged.
    pub fn set_memory(&mut self, value: f64) -> EvalResult<()> {
        self.memory = Self::checked(value)?;
        Ok(())
    }

    /// Resets memory to zero.
    pub const fn clear_memory(&mut self) {
        self.memory = 0.0;
    }

    /// Stores `value` as the last answer.
    ///
    /// # Errors
    /// `NonFiniteRegister` if `value` is not finite; the register is
    /// unchanged.
    pub fn set_last_answer(&mut self, value: f64) -> EvalResult<()> {
        self.last_answer = Self::checked(value)?;
        Ok(())
    }

    fn checked(value: f64) -> EvalResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(RuntimeError::NonFiniteRegister { value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_zero() {
        let registers = Registers::new();
        assert_eq!(registers, Registers::default());
        assert_eq!(registers.memory(), 0.0);
        assert_eq!(registers.last_answer(), 0.0);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut registers = Registers::new();
        registers.set_memory(3.0).unwrap();

        assert_eq!(registers.set_memory(f64::INFINITY),
                   Err(RuntimeError::NonFiniteRegister { value: f64::INFINITY }));
        assert!(registers.set_memory(f64::NAN).is_err());
        assert_eq!(registers.memory(), 3.0);
    }

    #[test]
    fn last_answer_round_trip() {
        let mut registers = Registers::new();
        registers.set_last_answer(42.0).unwrap();
        assert_eq!(registers.last_answer(), 42.0);
        assert_eq!(registers.memory(), 0.0);
    }
}
