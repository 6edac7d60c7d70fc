use crate::audio::capture::{DELIVERY_CHANNEL_CAPACITY, drain_blocks};

use std::sync::mpsc::{TrySendError, sync_channel};

/// WHAT: Draining a closed channel yields every block in arrival order
/// WHY: Stop must see all delivered samples, ordered, before concatenation
#[test]
fn given_delivered_blocks_when_draining_then_all_blocks_in_order() {
    // Given: Three blocks sent through the delivery channel
    let (tx, rx) = sync_channel::<Vec<i16>>(DELIVERY_CHANNEL_CAPACITY);
    for i in 0..3i16 {
        let _ = tx.send(vec![i; 1_000]);
    }

    // When: The sender is gone (stream closed) and the channel is drained
    drop(tx);
    let blocks = drain_blocks(rx);

    // Then: All blocks present, in the order they were delivered
    assert_eq!(blocks.len(), 3);
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(block.len(), 1_000);
        assert!(block.iter().all(|&s| s == i as i16));
    }
}

/// WHAT: Draining with zero delivered blocks yields an empty sequence
/// WHY: Stop immediately after start must produce a valid empty artifact
#[test]
fn given_no_delivered_blocks_when_draining_then_empty() {
    // Given: A channel with nothing sent
    let (tx, rx) = sync_channel::<Vec<i16>>(DELIVERY_CHANNEL_CAPACITY);

    // When: The sender is dropped and the channel drained
    drop(tx);
    let blocks = drain_blocks(rx);

    // Then: No blocks, no failure
    assert!(blocks.is_empty());
}

/// WHAT: A full delivery channel rejects the block without blocking
/// WHY: The audio callback must never stall the audio thread on overrun
#[test]
fn given_full_channel_when_sending_then_block_dropped_not_blocked() {
    // Given: A bounded channel filled to capacity
    let (tx, rx) = sync_channel::<Vec<i16>>(2);
    assert!(tx.try_send(vec![1; 8]).is_ok());
    assert!(tx.try_send(vec![2; 8]).is_ok());

    // When: One more block arrives while the channel is full
    let result = tx.try_send(vec![3; 8]);

    // Then: The send fails fast with Full, as the callback expects
    assert!(matches!(result, Err(TrySendError::Full(_))));

    // And: Draining after close still yields the accepted blocks in order
    drop(tx);
    let blocks = drain_blocks(rx);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0][0], 1);
    assert_eq!(blocks[1][0], 2);
}

/// WHAT: A send after the receiver is gone reports Disconnected
/// WHY: A late callback after stop() drained the channel must be harmless
#[test]
fn given_dropped_receiver_when_sending_then_disconnected() {
    // Given: A channel whose receiver was already drained and dropped
    let (tx, rx) = sync_channel::<Vec<i16>>(DELIVERY_CHANNEL_CAPACITY);
    drop(rx);

    // When: A straggler block is delivered
    let result = tx.try_send(vec![0; 8]);

    // Then: The send reports Disconnected instead of panicking or blocking
    assert!(matches!(result, Err(TrySendError::Disconnected(_))));
}
