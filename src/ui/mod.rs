mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

use anyhow::Result;
use inquire::InquireError;

/// Treats a cancelled interactive prompt as a normal exit.
///
/// When the user backs out of a prompt flow (Ctrl+C or Escape), the
/// wrapped result carries an inquire cancellation error. This prints a
/// newline to clean up the terminal and converts it to `Ok(())`; every
/// other error passes through untouched.
pub fn swallow_prompt_cancellation(result: Result<()>) -> Result<()> {
    match result {
        Err(e)
            if matches!(
                e.downcast_ref::<InquireError>(),
                Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
            ) =>
        {
            println!();
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_passes_through() {
        assert!(swallow_prompt_cancellation(Ok(())).is_ok());
    }

    #[test]
    fn test_cancellation_becomes_ok() {
        let cancelled = Err(InquireError::OperationCanceled.into());
        assert!(swallow_prompt_cancellation(cancelled).is_ok());

        let interrupted = Err(InquireError::OperationInterrupted.into());
        assert!(swallow_prompt_cancellation(interrupted).is_ok());
    }

    #[test]
    fn test_other_inquire_error_passes_through() {
        let custom = Err(InquireError::Custom("terminal broke".into()).into());
        assert!(swallow_prompt_cancellation(custom).is_err());
    }

    #[test]
    fn test_unrelated_error_passes_through() {
        let result = swallow_prompt_cancellation(Err(anyhow::anyhow!("disk full")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("disk full"));
    }
}
