use crate::{AudioClip, CHANNELS, SAMPLE_RATE};

/// WHAT: Concatenation preserves arrival order and total sample count
/// WHY: The artifact must contain exactly what was delivered, in order
#[test]
fn given_blocks_when_concatenating_then_count_is_sum_and_order_kept() {
    // Given: Three delivered blocks of 1,000 samples each
    let blocks = vec![vec![1i16; 1_000], vec![2i16; 1_000], vec![3i16; 1_000]];

    // When: Finalizing them into a clip
    let clip = AudioClip::from_blocks(blocks, SAMPLE_RATE, CHANNELS);

    // Then: 3,000 samples, block contents contiguous in arrival order
    assert_eq!(clip.samples.len(), 3_000);
    assert!(clip.samples[..1_000].iter().all(|&s| s == 1));
    assert!(clip.samples[1_000..2_000].iter().all(|&s| s == 2));
    assert!(clip.samples[2_000..].iter().all(|&s| s == 3));
}

/// WHAT: Zero delivered blocks produce a valid zero-duration clip
/// WHY: Stop immediately after start must not fail
#[test]
fn given_no_blocks_when_concatenating_then_valid_silent_clip() {
    // Given: No blocks delivered between start and stop
    let blocks: Vec<Vec<i16>> = Vec::new();

    // When: Finalizing the empty sequence
    let clip = AudioClip::from_blocks(blocks, SAMPLE_RATE, CHANNELS);

    // Then: A valid, empty, zero-duration artifact
    assert!(clip.is_empty());
    assert_eq!(clip.duration_seconds(), 0.0);
    assert_eq!(clip.sample_rate, SAMPLE_RATE);
    assert_eq!(clip.channels, CHANNELS);
}

/// WHAT: Duration derives from sample count, rate and channels
/// WHY: Status reporting shows recording length from the clip alone
#[test]
fn given_one_second_of_mono_samples_when_measuring_then_duration_is_one() {
    // Given: Exactly one second of mono samples at the capture rate
    let clip = AudioClip::from_blocks(
        vec![vec![0i16; SAMPLE_RATE as usize]],
        SAMPLE_RATE,
        CHANNELS,
    );

    // Then: Duration is one second
    assert!((clip.duration_seconds() - 1.0).abs() < f64::EPSILON);
}
