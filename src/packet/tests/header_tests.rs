//! Tests for header bit layout and reserved-bit validation.

use rstest::rstest;

use crate::packet::{Counter, HEADER_LEN, MalformedPacket, PacketHeader, PacketKind};

fn counter(value: u8) -> Counter {
    Counter::new(value).expect("value within the cyclic space")
}

#[rstest]
#[case(PacketKind::Data, false, false, 0, 0b0000_0000)]
#[case(PacketKind::Control, false, false, 0, 0b1000_0000)]
#[case(PacketKind::Data, true, false, 0, 0b0100_0000)]
#[case(PacketKind::Data, false, true, 0, 0b0010_0000)]
#[case(PacketKind::Data, true, true, 7, 0b0111_1100)]
#[case(PacketKind::Control, true, true, 5, 0b1111_0100)]
fn header_packs_expected_bits(
    #[case] kind: PacketKind,
    #[case] is_first: bool,
    #[case] is_last: bool,
    #[case] value: u8,
    #[case] expected: u8,
) {
    let header = PacketHeader::new(kind, is_first, is_last, counter(value));
    assert_eq!(header.to_bytes(), [expected, 0]);
}

#[rstest]
#[case(0b0000_0001)]
#[case(0b0000_0010)]
#[case(0b0000_0011)]
fn header_rejects_reserved_bits_in_first_byte(#[case] reserved: u8) {
    let err = PacketHeader::from_bytes(&[reserved, 0]).expect_err("reserved bits must be rejected");
    assert_eq!(
        err,
        MalformedPacket::ReservedBits {
            bits: u16::from_be_bytes([reserved, 0]),
        }
    );
}

#[test]
fn header_rejects_reserved_bits_in_second_byte() {
    let err = PacketHeader::from_bytes(&[0b0100_0000, 0x01]).expect_err("second byte is reserved");
    assert_eq!(err, MalformedPacket::ReservedBits { bits: 0x0001 });
}

#[rstest]
#[case(&[])]
#[case(&[0b0100_0000])]
fn header_rejects_truncated_input(#[case] bytes: &[u8]) {
    let err = PacketHeader::from_bytes(bytes).expect_err("short input must be rejected");
    assert_eq!(err, MalformedPacket::Truncated { len: bytes.len() });
}

#[test]
fn header_round_trips_every_field_combination() {
    for value in 0..Counter::SPACE {
        for &kind in &[PacketKind::Data, PacketKind::Control] {
            for &(is_first, is_last) in &[(false, false), (true, false), (false, true), (true, true)]
            {
                let header = PacketHeader::new(kind, is_first, is_last, counter(value));
                let decoded = PacketHeader::from_bytes(&header.to_bytes())
                    .expect("packed header must decode");
                assert_eq!(decoded, header);
            }
        }
    }
}

#[test]
fn header_len_matches_wire_layout() {
    let header = PacketHeader::new(PacketKind::Data, true, true, Counter::ZERO);
    assert_eq!(header.to_bytes().len(), HEADER_LEN);
}
