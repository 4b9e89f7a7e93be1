// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for viewfinder configuration selection

use proptest::prelude::*;
use viewfinder::backends::camera::{CaptureConfiguration, FrameRateRange};
use viewfinder::{
    EncodingPreferenceList, PixelEncoding, SelectionError, select_viewfinder_configuration,
};

fn config(width: u32, height: u32, encoding: PixelEncoding) -> CaptureConfiguration {
    CaptureConfiguration::new(width, height, encoding, FrameRateRange::new(15.0, 30.0))
}

#[test]
fn test_largest_area_among_preferred() {
    let configs = vec![
        config(640, 480, PixelEncoding::NV12),
        config(1920, 1080, PixelEncoding::NV21),
        config(1280, 720, PixelEncoding::NV12),
    ];
    let preferred = EncodingPreferenceList::new([PixelEncoding::NV12]);

    let best = select_viewfinder_configuration(&configs, &preferred).unwrap();
    assert!(std::ptr::eq(best, &configs[2]));
    assert_eq!(best.area(), 921_600);
}

#[test]
fn test_no_preferred_encoding_is_failure() {
    let configs = vec![config(1920, 1080, PixelEncoding::YUYV)];
    let preferred = EncodingPreferenceList::new([PixelEncoding::NV12, PixelEncoding::NV21]);

    let result = select_viewfinder_configuration(&configs, &preferred);
    assert!(matches!(
        result,
        Err(SelectionError::NoAcceptableConfiguration { candidates: 1, .. })
    ));
}

#[test]
fn test_duplicate_resolves_to_first() {
    let configs = vec![
        config(800, 600, PixelEncoding::NV12),
        config(800, 600, PixelEncoding::NV12),
    ];
    let preferred = EncodingPreferenceList::new([PixelEncoding::NV12]);

    let best = select_viewfinder_configuration(&configs, &preferred).unwrap();
    assert!(std::ptr::eq(best, &configs[0]));
    assert_eq!(best.area(), 480_000);
}

#[test]
fn test_android_defaults_accept_yv12() {
    let configs = vec![
        config(1280, 720, PixelEncoding::YV12),
        config(3840, 2160, PixelEncoding::MJPEG),
    ];
    let preferred = viewfinder::TargetPlatform::Android.default_preferences();

    let best = select_viewfinder_configuration(&configs, &preferred).unwrap();
    assert_eq!(best.pixel_encoding, PixelEncoding::YV12);
}

// ============================================================================
// Property tests
// ============================================================================

const ENCODINGS: [PixelEncoding; 5] = [
    PixelEncoding::NV12,
    PixelEncoding::NV21,
    PixelEncoding::YV12,
    PixelEncoding::YUYV,
    PixelEncoding::MJPEG,
];

fn arb_encoding() -> impl Strategy<Value = PixelEncoding> {
    (0..ENCODINGS.len()).prop_map(|i| ENCODINGS[i])
}

fn arb_config() -> impl Strategy<Value = CaptureConfiguration> {
    // Few distinct sizes so equal areas are common
    (
        prop::sample::select(vec![0u32, 320, 640, 800, 1280]),
        prop::sample::select(vec![0u32, 240, 480, 600, 720]),
        arb_encoding(),
    )
        .prop_map(|(w, h, e)| config(w, h, e))
}

fn arb_preferences() -> impl Strategy<Value = EncodingPreferenceList> {
    prop::collection::vec(arb_encoding(), 0..4).prop_map(EncodingPreferenceList::from)
}

proptest! {
    #[test]
    fn proptest_result_is_total_and_drawn_from_input(
        configs in prop::collection::vec(arb_config(), 0..12),
        preferred in arb_preferences(),
    ) {
        let any_qualifies = configs.iter().any(|c| preferred.contains(&c.pixel_encoding));

        match select_viewfinder_configuration(&configs, &preferred) {
            Ok(best) => {
                prop_assert!(any_qualifies);
                prop_assert!(configs.iter().any(|c| std::ptr::eq(c, best)));
                prop_assert!(preferred.contains(&best.pixel_encoding));
            }
            Err(SelectionError::NoAcceptableConfiguration { candidates, .. }) => {
                prop_assert!(!any_qualifies);
                prop_assert_eq!(candidates, configs.len());
            }
        }
    }

    #[test]
    fn proptest_selected_area_is_maximal_and_first(
        configs in prop::collection::vec(arb_config(), 1..12),
        preferred in arb_preferences(),
    ) {
        if let Ok(best) = select_viewfinder_configuration(&configs, &preferred) {
            let position = configs.iter().position(|c| std::ptr::eq(c, best)).unwrap();
            for (i, candidate) in configs.iter().enumerate() {
                if !preferred.contains(&candidate.pixel_encoding) {
                    continue;
                }
                prop_assert!(candidate.area() <= best.area());
                if candidate.area() == best.area() {
                    prop_assert!(i >= position);
                }
            }
        }
    }

    #[test]
    fn proptest_empty_input_fails(preferred in arb_preferences()) {
        prop_assert!(select_viewfinder_configuration(&[], &preferred).is_err());
    }

    #[test]
    fn proptest_disjoint_preferences_fail(
        configs in prop::collection::vec(arb_config(), 0..12),
    ) {
        // Nothing in the generated input is ever ARGB32
        let preferred = EncodingPreferenceList::new([PixelEncoding::ARGB32]);
        prop_assert!(select_viewfinder_configuration(&configs, &preferred).is_err());
    }

    #[test]
    fn proptest_preference_order_is_irrelevant(
        configs in prop::collection::vec(arb_config(), 0..12),
        encodings in prop::collection::vec(arb_encoding(), 0..4),
    ) {
        let forward = EncodingPreferenceList::new(encodings.iter().copied());
        let reversed = EncodingPreferenceList::new(encodings.iter().rev().copied());

        let a = select_viewfinder_configuration(&configs, &forward).ok();
        let b = select_viewfinder_configuration(&configs, &reversed).ok();
        prop_assert_eq!(
            a.map(|c| c as *const CaptureConfiguration),
            b.map(|c| c as *const CaptureConfiguration)
        );
    }
}
