//! Tests for outbound splitting and fragment flag placement.

use bytes::Bytes;
use rstest::rstest;

use crate::packet::{HEADER_LEN, PacketKind};
use crate::packetizer::{PacketBatch, Packetizer, PacketizeError};

fn assert_packet(batch: &PacketBatch, index: usize, payload: &[u8], is_first: bool, is_last: bool) {
    let packet = batch
        .packets()
        .get(index)
        .expect("packet missing at requested index");
    assert_eq!(packet.payload(), payload);
    assert_eq!(packet.is_first(), is_first);
    assert_eq!(packet.is_last(), is_last);
}

#[test]
fn packetizer_splits_payload_into_ordered_chunks() {
    let packetizer = Packetizer::new(HEADER_LEN + 3).expect("usable chunk size");
    let payload: Vec<u8> = (0..8).collect();
    let batch = packetizer.packetize(PacketKind::Data, Bytes::from(payload));

    assert_eq!(batch.len(), 3);
    assert!(batch.is_fragmented());
    assert_packet(&batch, 0, &[0, 1, 2], true, false);
    assert_packet(&batch, 1, &[3, 4, 5], false, false);
    assert_packet(&batch, 2, &[6, 7], false, true);
}

#[test]
fn single_chunk_message_carries_both_flags() {
    let packetizer = Packetizer::new(HEADER_LEN + 8).expect("usable chunk size");
    let batch = packetizer.packetize(PacketKind::Data, Bytes::from_static(&[1, 2, 3]));

    assert_eq!(batch.len(), 1);
    assert!(!batch.is_fragmented());
    assert_packet(&batch, 0, &[1, 2, 3], true, true);
}

#[test]
fn empty_message_still_produces_one_packet() {
    let packetizer = Packetizer::new(HEADER_LEN + 4).expect("usable chunk size");
    let batch = packetizer.packetize(PacketKind::Control, Bytes::new());

    assert_eq!(batch.len(), 1);
    assert_packet(&batch, 0, &[], true, true);
    let packet = batch.packets().first().expect("batch is never empty");
    assert_eq!(packet.kind(), PacketKind::Control);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(HEADER_LEN)]
fn packetizer_rejects_unusable_packet_sizes(#[case] max: usize) {
    let err = Packetizer::new(max).expect_err("no payload room must be rejected");
    assert_eq!(err, PacketizeError::ZeroChunkSize { max_packet_size: max });
}

#[rstest]
#[case(17, 1)]
#[case(18, 1)]
#[case(19, 2)]
#[case(36, 2)]
#[case(37, 3)]
fn packet_count_tracks_chunk_boundaries(#[case] len: usize, #[case] expected_packets: usize) {
    let packetizer = Packetizer::new(20).expect("usable chunk size");
    assert_eq!(packetizer.chunk_size(), 18);

    let batch = packetizer.packetize(PacketKind::Data, Bytes::from(vec![0xA5; len]));
    assert_eq!(batch.len(), expected_packets);

    let last = batch.packets().last().expect("batch is never empty");
    assert!(last.is_last());
}
