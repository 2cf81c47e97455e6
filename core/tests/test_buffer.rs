#[cfg(test)]
mod buffer_tests {
    use rand::{rngs::StdRng, SeedableRng};

    use codec_core::{buffer::Buffer, compression::CodecError, constants::SENTINEL_BYTES};

    #[test]
    fn new_buffer_is_zeroed_and_full_length() {
        let buf = Buffer::new(16);
        assert_eq!(buf.len(), 16);
        assert_eq!(buf.capacity(), 16);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn trim_shrinks_without_reallocating() {
        let mut buf = Buffer::from_vec(vec![1, 2, 3, 4, 5]);
        buf.trim(2).unwrap();
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.capacity(), 5);
        assert_eq!(buf.as_slice(), &[1, 2]);
        assert_eq!(buf.raw(), &[1, 2, 3, 4, 5]);

        // can grow back within capacity
        buf.trim(5).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn trim_past_capacity_is_rejected() {
        let mut buf = Buffer::new(4);
        let err = buf.trim(5).unwrap_err();
        assert!(matches!(err, CodecError::AllocationTooSmall { need: 5, have: 4, .. }));
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn prefix_eq_compares_up_to_shorter_length() {
        let a = Buffer::from_vec(vec![9, 8, 7, 6]);
        let b = Buffer::from_vec(vec![9, 8]);
        let c = Buffer::from_vec(vec![9, 1]);
        assert!(a.prefix_eq(&b));
        assert!(b.prefix_eq(&a));
        assert!(!a.prefix_eq(&c));
    }

    #[test]
    fn concat_keeps_both_parts_in_order() {
        let mut a = Buffer::from_vec(vec![1, 2, 3, 0, 0]);
        a.trim(3).unwrap();
        let b = Buffer::from_vec(vec![4, 5]);

        let joined = &a + &b;
        assert_eq!(joined.len(), a.len() + b.len());
        assert_eq!(joined.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(&joined.as_slice()[..a.len()], a.as_slice());
        assert_eq!(&joined.as_slice()[a.len()..], b.as_slice());
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let a = Buffer::from_vec(vec![1, 2, 3]);
        let mut b = a.clone();
        b.as_mut_slice()[0] = 42;
        assert_eq!(a.as_slice()[0], 1);
    }

    #[test]
    fn random_is_reproducible_for_a_seed() {
        let a = Buffer::random(256, &mut StdRng::seed_from_u64(7));
        let b = Buffer::random(256, &mut StdRng::seed_from_u64(7));
        let c = Buffer::random(256, &mut StdRng::seed_from_u64(8));
        assert_eq!(a.as_slice(), b.as_slice());
        assert_ne!(a.as_slice(), c.as_slice());
    }

    #[test]
    fn guard_detects_overwrite() {
        let mut buf = Buffer::with_guard(8, &SENTINEL_BYTES);
        assert_eq!(buf.len(), 12);
        assert!(buf.guard_intact(8, &SENTINEL_BYTES));

        buf.raw_mut()[..8].copy_from_slice(&[0xff; 8]);
        assert!(buf.guard_intact(8, &SENTINEL_BYTES));

        buf.raw_mut()[9] = 0;
        assert!(!buf.guard_intact(8, &SENTINEL_BYTES));
    }

    #[test]
    fn guard_out_of_range_is_not_intact() {
        let buf = Buffer::new(2);
        assert!(!buf.guard_intact(1, &SENTINEL_BYTES));
    }
}
