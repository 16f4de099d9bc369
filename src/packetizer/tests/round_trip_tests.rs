//! Round-trip property: reassembling a packetized message reproduces it.

use bytes::Bytes;
use proptest::prelude::*;
use rstest::rstest;

use crate::packet::{HEADER_LEN, Packet, PacketKind};
use crate::packetizer::{Packetizer, Reassembler};
use crate::sequence::SequenceGenerator;

/// Stamp, encode, decode, and reassemble a whole batch in fragment order.
fn round_trip(payload: Vec<u8>, max_packet_size: usize) -> Bytes {
    let packetizer = Packetizer::new(max_packet_size).expect("usable chunk size");
    let batch = packetizer.packetize(PacketKind::Data, Bytes::from(payload));

    let mut seq = SequenceGenerator::new();
    let mut reassembler = Reassembler::with_default_limit();
    let mut completed = None;

    for pending in batch {
        let wire = pending
            .stamp(seq.next())
            .encode(max_packet_size)
            .expect("chunks always fit the packet size");
        let packet = Packet::decode(&wire).expect("encoded packets decode");
        completed = reassembler.on_packet(&packet).expect("in-order packets");
    }

    completed.expect("last fragment completes the message")
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(18)]
#[case(19)]
#[case(36)]
#[case(54)]
fn boundary_lengths_round_trip_at_packet_size_20(#[case] len: usize) {
    let payload: Vec<u8> = (0..len).map(|i| u8::try_from(i % 251).expect("fits")).collect();
    assert_eq!(round_trip(payload.clone(), 20), Bytes::from(payload));
}

proptest! {
    #[test]
    fn any_message_round_trips(
        payload in proptest::collection::vec(any::<u8>(), 0..512),
        max_packet_size in (HEADER_LEN + 1)..64_usize,
    ) {
        let reassembled = round_trip(payload.clone(), max_packet_size);
        prop_assert_eq!(reassembled, Bytes::from(payload));
    }
}
