//! Multilayer cipher pipeline.
//!
//! A pipeline chains up to [`MAX_LAYERS`] layers: encryption runs them in
//! the given order, decryption runs the same list back to front, each layer
//! with its own key. Callers pass the identical layer list in both
//! directions; reversing it is the pipeline's job.

use log::{debug, info};

use crate::{
    error::CipherlabError,
    layer::{Layer, Mode},
    registry::{LayerCipher, Registry},
};

/// Default upper bound on the number of layers in one pipeline.
pub const MAX_LAYERS: usize = 3;

/// Runs `text` through `layers` with the default layer limit.
///
/// Empty text or an empty layer list returns `text` unchanged.
///
/// # Errors
///
/// See [`process_bounded`].
///
/// # Examples
///
/// ```
/// use cipherlab::{Layer, Mode, Registry, pipeline};
///
/// let registry = Registry::standard();
/// let layers = [Layer::new("caesar", "3"), Layer::new("railfence", "2")];
///
/// let ciphertext = pipeline::process("HELLO", &layers, Mode::Encrypt, &registry).unwrap();
/// let plaintext = pipeline::process(&ciphertext, &layers, Mode::Decrypt, &registry).unwrap();
/// assert_eq!(plaintext, "HELLO");
/// ```
pub fn process(
    text: &str,
    layers: &[Layer],
    mode: Mode,
    registry: &Registry,
) -> Result<String, CipherlabError> {
    process_bounded(text, layers, mode, registry, MAX_LAYERS)
}

/// Runs `text` through `layers`, allowing at most `max_layers` of them.
///
/// Every layer's algorithm is resolved before any text is transformed, and
/// the first failing layer aborts the whole run; no partial output is
/// returned.
///
/// # Errors
///
/// - [`CipherlabError::TooManyLayers`] when `layers` is longer than `max_layers`
/// - [`CipherlabError::Layer`] wrapping [`CipherlabError::UnknownAlgorithm`]
///   for an unregistered algorithm name
/// - [`CipherlabError::Layer`] wrapping [`CipherlabError::InvalidKey`] when a
///   layer's key does not parse
/// - [`CipherlabError::Layer`] wrapping [`CipherlabError::Transform`] when a
///   cipher fails for any other reason
pub fn process_bounded(
    text: &str,
    layers: &[Layer],
    mode: Mode,
    registry: &Registry,
    max_layers: usize,
) -> Result<String, CipherlabError> {
    if text.is_empty() || layers.is_empty() {
        debug!("Nothing to process, returning input unchanged");
        return Ok(text.to_string());
    }
    if layers.len() > max_layers {
        return Err(CipherlabError::TooManyLayers {
            count: layers.len(),
            max: max_layers,
        });
    }

    let mut steps = resolve(layers, registry)?;
    if mode == Mode::Decrypt {
        steps.reverse();
    }

    info!(layers = steps.len(), mode:?; "Processing layers");
    steps
        .into_iter()
        .try_fold(text.to_string(), |current, (position, layer, cipher)| {
            debug!(layer = position, algorithm = layer.algorithm(); "Applying layer");
            cipher
                .apply(&current, layer.key(), mode)
                .map_err(|err| {
                    err.for_algorithm(layer.algorithm())
                        .in_layer(position, layer.algorithm())
                })
        })
}

type Step<'a> = (usize, &'a Layer, &'a dyn LayerCipher);

/// Pairs each layer with its cipher, numbering layers from 1 in list order.
fn resolve<'a>(layers: &'a [Layer], registry: &'a Registry) -> Result<Vec<Step<'a>>, CipherlabError> {
    layers
        .iter()
        .enumerate()
        .map(|(index, layer)| {
            let position = index + 1;
            registry
                .cipher(layer.algorithm())
                .map(|cipher| (position, layer, cipher))
                .map_err(|err| err.in_layer(position, layer.algorithm()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use cipherlab_core::KeyError;

    use super::*;

    fn layers(pairs: &[(&str, &str)]) -> Vec<Layer> {
        pairs.iter()
            .map(|(algorithm, key)| Layer::new(*algorithm, *key))
            .collect()
    }

    #[test]
    fn test_hello_round_trip() {
        let registry = Registry::standard();
        let layers = layers(&[("caesar", "3"), ("railfence", "2")]);

        let ciphertext = process("HELLO", &layers, Mode::Encrypt, &registry).unwrap();
        // caesar: KHOOR, then two rails: K O R / H O
        assert_eq!(ciphertext, "KORHO");
        assert_eq!(
            process(&ciphertext, &layers, Mode::Decrypt, &registry).unwrap(),
            "HELLO"
        );
    }

    #[test]
    fn test_order_matters() {
        let registry = Registry::standard();
        let forward = layers(&[("vigenere", "KEY"), ("rowcolumn", "21")]);
        let backward = layers(&[("rowcolumn", "21"), ("vigenere", "KEY")]);

        let a = process("ATTACKATDAWN", &forward, Mode::Encrypt, &registry).unwrap();
        let b = process("ATTACKATDAWN", &backward, Mode::Encrypt, &registry).unwrap();
        assert_ne!(a, b);
        assert_eq!(
            process(&a, &forward, Mode::Decrypt, &registry).unwrap(),
            "ATTACKATDAWN"
        );
        assert_eq!(
            process(&b, &backward, Mode::Decrypt, &registry).unwrap(),
            "ATTACKATDAWN"
        );
    }

    #[test]
    fn test_three_layers_round_trip() {
        let registry = Registry::standard();
        let layers = layers(&[
            ("mono", "QWERTYUIOPASDFGHJKLZXCVBNM"),
            ("vigenere", "lemon"),
            ("railfence", "4"),
        ]);
        let text = "Meet me by the old oak tree, at noon.";

        let ciphertext = process(text, &layers, Mode::Encrypt, &registry).unwrap();
        assert_ne!(ciphertext, text);
        assert_eq!(
            process(&ciphertext, &layers, Mode::Decrypt, &registry).unwrap(),
            text
        );
    }

    #[test]
    fn test_identity_cases() {
        let registry = Registry::standard();
        let some = layers(&[("caesar", "3")]);
        for mode in [Mode::Encrypt, Mode::Decrypt] {
            assert_eq!(process("", &some, mode, &registry).unwrap(), "");
            assert_eq!(process("HELLO", &[], mode, &registry).unwrap(), "HELLO");
        }
        // Empty input short-circuits before layers are resolved.
        let unknown = layers(&[("enigma", "x")]);
        assert_eq!(process("", &unknown, Mode::Encrypt, &registry).unwrap(), "");
    }

    #[test]
    fn test_unknown_algorithm_names_layer() {
        let registry = Registry::standard();
        let layers = layers(&[("caesar", "3"), ("enigma", "x"), ("railfence", "2")]);

        for mode in [Mode::Encrypt, Mode::Decrypt] {
            let err = process("HELLO", &layers, mode, &registry).unwrap_err();
            match &err {
                CipherlabError::Layer {
                    layer, algorithm, ..
                } => {
                    assert_eq!(*layer, 2);
                    assert_eq!(algorithm, "enigma");
                }
                other => panic!("Expected layer error, got {other:?}"),
            }
            assert!(matches!(err.root(), CipherlabError::UnknownAlgorithm(_)));
        }
    }

    #[test]
    fn test_invalid_keys_abort() {
        let registry = Registry::standard();

        let err = process(
            "HELLO",
            &layers(&[("caesar", "three")]),
            Mode::Encrypt,
            &registry,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "layer 1 (caesar): invalid key for caesar: key `three` is not a whole number"
        );

        let err = process(
            "HELLO",
            &layers(&[("caesar", "1"), ("railfence", "1")]),
            Mode::Decrypt,
            &registry,
        )
        .unwrap_err();
        assert!(matches!(
            err.root(),
            CipherlabError::InvalidKey {
                source: KeyError::TooFewRails(1),
                ..
            }
        ));
    }

    #[test]
    fn test_layer_limit() {
        let registry = Registry::standard();
        let four = layers(&[
            ("caesar", "1"),
            ("caesar", "2"),
            ("caesar", "3"),
            ("caesar", "4"),
        ]);

        let err = process("HELLO", &four, Mode::Encrypt, &registry).unwrap_err();
        assert!(matches!(
            err,
            CipherlabError::TooManyLayers { count: 4, max: 3 }
        ));
        assert_eq!(
            process_bounded("HELLO", &four, Mode::Encrypt, &registry, 4).unwrap(),
            "ROVVY"
        );
    }
}
