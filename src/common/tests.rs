#[cfg(test)]
mod common_tests {
    use crate::common::common::{current_time, current_time_nanos, hex2bin, ordered_uuid};
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_hex2bin_valid() {
        let hash = hex2bin("0000000000000000000000000000000000000000").unwrap();
        assert_eq!(hash, [0u8; 20]);

        let hash = hex2bin("ffffffffffffffffffffffffffffffffffffffff").unwrap();
        assert_eq!(hash, [255u8; 20]);
    }

    #[test]
    fn test_hex2bin_mixed_case() {
        let lower = hex2bin("0a1b2c3d4e5f60718293a4b5c6d7e8f901234567").unwrap();
        let upper = hex2bin("0A1B2C3D4E5F60718293A4B5C6D7E8F901234567").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_hex2bin_wrong_length() {
        assert!(hex2bin("abcdef").is_err());
        assert!(hex2bin("").is_err());
        assert!(hex2bin("0000000000000000000000000000000000000000ff").is_err());
    }

    #[test]
    fn test_hex2bin_invalid_characters() {
        assert!(hex2bin("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }

    #[test]
    fn test_current_time_is_recent() {
        let now = current_time();
        assert!(now > 1_700_000_000);
    }

    #[test]
    fn test_current_time_nanos_monotonic_enough() {
        let first = current_time_nanos();
        let second = current_time_nanos();
        assert!(second >= first);
    }

    #[test]
    fn test_ordered_uuid_sorts_in_creation_order() {
        let mut previous = ordered_uuid();
        for _ in 0..100 {
            let next = ordered_uuid();
            assert!(next > previous, "ids must sort by creation order within a millisecond");
            previous = next;
        }
    }

    #[test]
    fn test_ordered_uuid_usable_across_threads() {
        let handles: Vec<_> = (0..4).map(|_| {
            std::thread::spawn(|| (0..25).map(|_| ordered_uuid()).collect::<Vec<_>>())
        }).collect();
        let mut all: Vec<_> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        let count = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), count, "concurrently generated ids must be unique");
    }

    #[test]
    fn test_custom_error_display() {
        let err = CustomError::new("something broke");
        assert_eq!(format!("{}", err), "something broke");
    }
}
