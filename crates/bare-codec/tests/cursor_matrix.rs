//! Cursor matrix: buffer limits, growth and one-shot helpers.

use bare_codec::{
    encode, read_f64, read_string, read_u32, read_uint, write_data, write_f64, write_string,
    write_u32, write_u8, write_uint, ByteCursor, Config, ConfigError, Issue, Result,
};
use proptest::prelude::*;

fn config(initial: u32, max: u32) -> Config {
    Config::builder()
        .initial_buffer_length(initial)
        .max_buffer_length(max)
        .build()
        .unwrap()
}

fn write_message(bc: &mut ByteCursor<'_>) -> Result<()> {
    for i in 0..100u32 {
        write_u32(bc, i * 0x0101_0101)?;
        write_uint(bc, u64::from(i) << 20)?;
        write_string(bc, "growth")?;
        write_f64(bc, f64::from(i) / 3.0)?;
    }
    write_data(bc, &[0xab; 300])
}

#[test]
fn too_large_input_is_rejected_at_construction() {
    let cfg = config(0, 3);
    let bytes = [0u8; 6];
    let err = ByteCursor::new(&bytes[..], cfg).unwrap_err();
    assert_eq!(err.to_string(), "(byte:0) too large buffer");
    assert!(ByteCursor::new(&bytes[..3], cfg).is_ok());
}

#[test]
fn initial_length_above_max_is_rejected() {
    let err = Config::builder()
        .initial_buffer_length(10)
        .max_buffer_length(5)
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::InitialExceedsMax { initial: 10, max: 5 });
    assert_eq!(
        err.to_string(),
        "initialBufferLength (10) must be lower than or equal to maxBufferLength (5)"
    );
}

#[test]
fn growth_matches_a_presized_buffer() {
    let small = encode(config(1, 1 << 20), write_message).unwrap();
    let large = encode(config(1 << 16, 1 << 20), write_message).unwrap();
    assert_eq!(small, large);
    assert!(small.len() > 1);

    let mut bc = ByteCursor::new(&small[..], Config::default()).unwrap();
    for i in 0..100u32 {
        assert_eq!(read_u32(&mut bc).unwrap(), i * 0x0101_0101);
        assert_eq!(read_uint(&mut bc).unwrap(), u64::from(i) << 20);
        assert_eq!(read_string(&mut bc).unwrap(), "growth");
        assert_eq!(read_f64(&mut bc).unwrap(), f64::from(i) / 3.0);
    }
}

#[test]
fn growth_stops_at_max_buffer_length() {
    let exact = encode(Config::default(), write_message).unwrap();
    let len = exact.len() as u32;
    assert_eq!(encode(config(0, len), write_message).unwrap(), exact);

    let err = encode(config(0, len - 1), write_message).unwrap_err();
    assert_eq!((err.issue(), err.offset()), (Issue::TooLargeBuffer, 0));
}

#[test]
fn failed_write_keeps_previous_bytes() {
    let mut bc = ByteCursor::with_config(config(0, 4));
    write_u32(&mut bc, 0xdead_beef).unwrap();
    assert_eq!(write_u8(&mut bc, 0).unwrap_err().issue(), Issue::TooLargeBuffer);
    assert_eq!(bc.offset(), 4);
    assert_eq!(bc.into_written(), [0xef, 0xbe, 0xad, 0xde]);
}

#[test]
fn writing_over_borrowed_bytes_copies_them() {
    let backing = [1u8, 2, 3, 4];
    let mut bc = ByteCursor::new(&backing[..], Config::default()).unwrap();
    bc.set_offset(2);
    write_u32(&mut bc, 0).unwrap();
    assert_eq!(bc.written(), &[1, 2, 0, 0, 0, 0]);
    assert_eq!(backing, [1, 2, 3, 4]);
}

#[test]
fn writing_into_owned_bytes_overwrites_in_place() {
    let mut bc = ByteCursor::new(vec![9u8; 4], Config::default()).unwrap();
    write_u8(&mut bc, 1).unwrap();
    assert_eq!(bc.written(), &[1]);
    assert_eq!(bc.bytes(), &[1, 9, 9, 9]);
    assert_eq!(bc.remaining(), 3);
}

proptest! {
    #[test]
    fn any_initial_length_yields_the_same_bytes(
        initial in 0u32..64,
        values in proptest::collection::vec(any::<u64>(), 0..64),
    ) {
        let write = |bc: &mut ByteCursor<'_>| -> Result<()> {
            for &v in &values {
                write_uint(bc, v)?;
            }
            Ok(())
        };
        let small = encode(config(initial, 1 << 12), write).unwrap();
        let large = encode(Config::default(), write).unwrap();
        prop_assert_eq!(small, large);
    }
}
