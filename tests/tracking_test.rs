use std::sync::Arc;
use std::thread;

use multibox_rs::{
    CategoryTable, CategoryVisibility, Detection, MultiBoxTracker, Rect, TrackerConfig,
    TrackerError,
};

fn det(label: &str, confidence: f32, rect: (f32, f32, f32, f32)) -> Detection {
    Detection::new(label, confidence, Rect::new(rect.0, rect.1, rect.2, rect.3))
}

fn configured_tracker() -> MultiBoxTracker {
    let tracker = MultiBoxTracker::new(TrackerConfig::default());
    tracker.configure(640, 480, 0).unwrap();
    tracker
}

fn show_all() -> CategoryVisibility {
    CategoryVisibility::all_visible(&CategoryTable::default())
}

#[test]
fn test_disjoint_distinct_labels_all_render() {
    let tracker = configured_tracker();
    let labels = ["person", "bicycle", "car", "truck", "bus", "train"];
    let dets: Vec<_> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = i as f32 * 100.0;
            det(label, 0.8, (x, 0.0, x + 50.0, 50.0))
        })
        .collect();

    assert_eq!(tracker.update(&dets), Ok(labels.len()));
    let commands = tracker.render(640, 480, &show_all()).unwrap();
    assert_eq!(commands.len(), labels.len());
    for (command, label) in commands.iter().zip(labels) {
        assert_eq!(command.label, label);
    }
}

#[test]
fn test_earlier_duplicate_survives_regardless_of_confidence() {
    let tracker = configured_tracker();
    tracker
        .update(&[
            det("car", 0.9, (0.0, 0.0, 100.0, 100.0)),
            det("car", 0.4, (5.0, 5.0, 95.0, 95.0)),
        ])
        .unwrap();

    let items = tracker.tracked_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].confidence, 0.9);

    // Same pair, weaker box first.
    tracker
        .update(&[
            det("car", 0.4, (5.0, 5.0, 95.0, 95.0)),
            det("car", 0.9, (0.0, 0.0, 100.0, 100.0)),
        ])
        .unwrap();
    let items = tracker.tracked_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].confidence, 0.4);
}

#[test]
fn test_small_boxes_never_survive() {
    let tracker = configured_tracker();
    tracker
        .update(&[
            det("car", 1.0, (0.0, 0.0, 15.0, 300.0)),
            det("bus", 1.0, (100.0, 0.0, 400.0, 10.0)),
            det("truck", 1.0, (500.0, 0.0, 500.0, 0.0)),
        ])
        .unwrap();
    assert!(tracker.tracked_items().is_empty());
}

#[test]
fn test_capacity_is_palette_size() {
    let tracker = configured_tracker();
    let capacity = tracker.config().palette.len();
    let dets: Vec<_> = (0..capacity + 5)
        .map(|i| {
            let x = (i % 10) as f32 * 60.0;
            let y = (i / 10) as f32 * 60.0;
            det("person", 0.6, (x, y, x + 20.0, y + 20.0))
        })
        .collect();

    assert_eq!(tracker.update(&dets), Ok(capacity));
    let items = tracker.tracked_items();
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.color_index, i);
        assert_eq!(item.rect, dets[i].rect);
    }
}

#[test]
fn test_render_before_configure_is_unconfigured() {
    let tracker = MultiBoxTracker::default();
    assert_eq!(
        tracker.render(640, 480, &show_all()),
        Err(TrackerError::Unconfigured)
    );
}

#[test]
fn test_same_size_canvas_renders_unchanged() {
    let tracker = configured_tracker();
    tracker.update(&[det("bus", 0.7, (10.0, 10.0, 50.0, 50.0))]).unwrap();

    let commands = tracker.render(640, 480, &show_all()).unwrap();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].rect, Rect::new(10.0, 10.0, 50.0, 50.0));
}

#[test]
fn test_hidden_category_emits_nothing() {
    let tracker = configured_tracker();
    tracker.update(&[det("car", 0.9, (0.0, 0.0, 100.0, 100.0))]).unwrap();

    let visibility = CategoryVisibility::from_iter([("car", false)]);
    assert!(tracker.render(640, 480, &visibility).unwrap().is_empty());
}

#[test]
fn test_rotated_portrait_canvas() {
    let tracker = MultiBoxTracker::default();
    tracker.configure(640, 480, 90).unwrap();
    tracker.update(&[det("person", 0.9, (0.0, 0.0, 100.0, 50.0))]).unwrap();

    // Portrait canvas twice the rotated frame size.
    let commands = tracker.render(960, 1280, &show_all()).unwrap();
    let rect = commands[0].rect;
    let expected = [860.0, 0.0, 960.0, 200.0];
    for (got, want) in rect.to_ltrb().into_iter().zip(expected) {
        assert!((got - want).abs() < 1e-3, "{rect:?}");
    }
}

#[test]
fn test_concurrent_update_and_render() {
    let tracker = Arc::new(configured_tracker());
    let batch_a: Vec<_> = (0..4)
        .map(|i| det("car", 0.9, (i as f32 * 100.0, 0.0, i as f32 * 100.0 + 50.0, 50.0)))
        .collect();
    let batch_b: Vec<_> = (0..7)
        .map(|i| det("bus", 0.9, (i as f32 * 80.0, 100.0, i as f32 * 80.0 + 40.0, 140.0)))
        .collect();
    tracker.update(&batch_a).unwrap();

    let writer = {
        let tracker = Arc::clone(&tracker);
        thread::spawn(move || {
            for round in 0..500 {
                let batch = if round % 2 == 0 { &batch_b } else { &batch_a };
                tracker.update(batch).unwrap();
            }
        })
    };

    let visibility = show_all();
    for _ in 0..500 {
        let commands = tracker.render(640, 480, &visibility).unwrap();
        // Never a mix of two batches.
        let cars = commands.iter().filter(|c| c.label == "car").count();
        let buses = commands.iter().filter(|c| c.label == "bus").count();
        assert!((cars, buses) == (4, 0) || (cars, buses) == (0, 7));
    }
    writer.join().unwrap();
}
