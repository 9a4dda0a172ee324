//! Rendering of call outcomes.

use gigya::Outcome;
use serde_json::Value;

/// JSON rendition of an outcome: the envelope, `null` when the limit was
/// reached and `false` when there was no response.
pub fn outcome_to_json(outcome: Outcome) -> Value {
    match outcome {
        Outcome::Success(envelope) => envelope.into_value(),
        Outcome::LimitReached => Value::Null,
        Outcome::NoResponse => Value::Bool(false),
    }
}

/// Prints an outcome to stdout.
pub fn print_outcome(outcome: Outcome, pretty: bool) -> serde_json::Result<()> {
    let json = outcome_to_json(outcome);
    let rendered = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    println!("{rendered}");
    Ok(())
}
