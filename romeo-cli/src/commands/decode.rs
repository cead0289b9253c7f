//! Implementation of the 'decode' subcommand.

use crate::error::CliResult;

use romeo_core::reporting::{DecodeOutcome, Reporter};
use romeo_core::{Codec, MessageStore, Payload};

use log::{debug, error, info, warn};

/// Runs the decode workflow.
///
/// An empty store is reported to the user and yields `Ok(None)`; it is not
/// an error.
pub fn run_decode(
    store: &dyn MessageStore,
    reporter: &dyn Reporter,
) -> CliResult<Option<DecodeOutcome>> {
    debug!("Started decoding process.");
    let location = store.location();

    let Some(encoded) = store.read()? else {
        error!("{} not found.", location);
        reporter.nothing_to_decode(&location);
        return Ok(None);
    };
    debug!("Successfully read {}.", location);

    let codec = Codec::standard()?;
    let plaintext = codec.decode(&encoded).map_err(|e| {
        warn!("Failed to decode {} from {}: {}", Payload(&encoded), location, e);
        e
    })?;
    info!("Message in {}: {}", location, Payload(&encoded));
    info!("Decoded {} to {}", Payload(&encoded), Payload(&plaintext));

    let outcome = DecodeOutcome {
        encoded,
        plaintext,
        location,
    };
    reporter.decoded(&outcome);

    debug!("Finished decoding process.");
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use romeo_core::reporting::NullReporter;
    use romeo_core::{CodecError, CoreError, MemoryMessageStore};

    #[test]
    fn decodes_stored_message() {
        let store = MemoryMessageStore::with_message("43,30,104");
        let outcome = run_decode(&store, &NullReporter).unwrap().unwrap();
        assert_eq!(outcome.plaintext, "Hi!");
        assert_eq!(outcome.location, "memory");
    }

    #[test]
    fn empty_store_is_not_an_error() {
        let store = MemoryMessageStore::new();
        assert!(run_decode(&store, &NullReporter).unwrap().is_none());
    }

    #[test]
    fn malformed_message_fails_without_output() {
        let store = MemoryMessageStore::with_message("43,,104");
        let err = run_decode(&store, &NullReporter).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Codec(CodecError::MalformedToken { position: 1, .. })
        ));
    }

    #[test]
    fn unknown_token_fails() {
        let store = MemoryMessageStore::with_message("43,999,104");
        let err = run_decode(&store, &NullReporter).unwrap_err();
        assert!(matches!(err, CoreError::Codec(CodecError::UnknownToken { .. })));
    }
}
