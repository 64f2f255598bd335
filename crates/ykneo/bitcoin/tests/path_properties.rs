//! Property tests for key path encoding

use proptest::prelude::*;
use ykneo_bitcoin::{HARDENED_BIT, KeyPath, encode_path};

fn component() -> impl Strategy<Value = (u32, bool)> {
    (0..HARDENED_BIT, any::<bool>())
}

fn render(components: &[(u32, bool)]) -> String {
    components
        .iter()
        .map(|(index, hardened)| {
            if *hardened {
                format!("{index}'")
            } else {
                index.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

proptest! {
    #[test]
    fn encoded_length_is_four_bytes_per_component(
        components in prop::collection::vec(component(), 0..10)
    ) {
        let encoded = encode_path(&render(&components)).unwrap();
        prop_assert_eq!(encoded.len(), 4 * components.len());
    }

    #[test]
    fn decoding_recovers_indices_and_hardening(
        components in prop::collection::vec(component(), 0..10)
    ) {
        let encoded = encode_path(&render(&components)).unwrap();
        let decoded = KeyPath::from_bytes(&encoded).unwrap();

        prop_assert_eq!(decoded.len(), components.len());
        for (word, (index, hardened)) in decoded.components().iter().zip(&components) {
            prop_assert_eq!(word & !HARDENED_BIT, *index);
            prop_assert_eq!(word & HARDENED_BIT != 0, *hardened);
        }
    }

    #[test]
    fn display_is_canonical(
        components in prop::collection::vec(component(), 0..10)
    ) {
        let text = render(&components);
        let path: KeyPath = text.parse().unwrap();
        prop_assert_eq!(path.to_string(), text);
    }

    #[test]
    fn out_of_range_components_are_rejected(index in (u32::MAX as u64 + 1)..u64::MAX) {
        prop_assert!(encode_path(&index.to_string()).is_err());
        let hardened = format!("0/{index}'");
        prop_assert!(encode_path(&hardened).is_err());
    }
}
