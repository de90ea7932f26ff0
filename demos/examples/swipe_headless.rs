// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognition against an in-memory scene.
//!
//! This example shows how to:
//! - describe a container with swipeable rows using `understory_swipe::headless`,
//! - feed touch samples to a `SwipeRecognizer`,
//! - tell swipes from pass-through taps by looking at what the bridge received,
//! - switch recognition off while a row is open.
//!
//! Run:
//! - `cargo run -p understory_demos --example swipe_headless`
//! - `RUST_LOG=understory_swipe=trace cargo run -p understory_demos --example swipe_headless`

use kurbo::Rect;
use understory_swipe::headless::{BridgeCall, HeadlessBridge, HeadlessScene};
use understory_swipe::{SwipeConfig, SwipeError, SwipeOptions, SwipeRecognizer, TouchEvent};

fn main() -> Result<(), SwipeError> {
    #[cfg(feature = "logging")]
    let _ = env_logger::try_init();

    // A 320x480 list with three 60px rows.
    let mut scene = HeadlessScene::new();
    let list = scene.insert(None, Rect::new(0.0, 0.0, 320.0, 480.0), &["#inbox"]);
    let rows: Vec<_> = (0..3_u32)
        .map(|i| {
            let y = f64::from(i) * 60.0;
            scene.insert(Some(list), Rect::new(0.0, y, 320.0, y + 60.0), &[".row"])
        })
        .collect();

    let options = SwipeOptions::new("#inbox", ".row", ".open").with_config(SwipeConfig::default());
    let mut recognizer = SwipeRecognizer::new(scene, HeadlessBridge::new(), options)?;
    recognizer.attach();

    let gestures: [(&str, [TouchEvent; 3]); 5] = [
        (
            "diagonal flick left",
            [
                TouchEvent::start(200.0, 100.0, 0),
                TouchEvent::moved(150.0, 70.0, 60),
                TouchEvent::end(110.0, 40.0, 120),
            ],
        ),
        (
            "short tap on the third row",
            [
                TouchEvent::start(100.0, 150.0, 1_000),
                TouchEvent::moved(101.0, 151.0, 1_030),
                TouchEvent::end(102.0, 151.0, 1_060),
            ],
        ),
        (
            "perfectly horizontal drag",
            [
                TouchEvent::start(300.0, 30.0, 2_000),
                TouchEvent::moved(200.0, 30.0, 2_050),
                TouchEvent::end(100.0, 30.0, 2_100),
            ],
        ),
        (
            "slow drag down",
            [
                TouchEvent::start(100.0, 20.0, 3_000),
                TouchEvent::moved(110.0, 100.0, 3_200),
                TouchEvent::end(120.0, 170.0, 3_400),
            ],
        ),
        (
            "aborted gesture",
            [
                TouchEvent::start(50.0, 50.0, 4_000),
                TouchEvent::moved(20.0, 20.0, 4_050),
                TouchEvent::abort(10.0, 10.0, 4_060),
            ],
        ),
    ];

    for (label, events) in gestures {
        println!("\n== {label} ==");
        recognizer.bridge_mut().clear();
        for mut event in events {
            recognizer.handle(&mut event);
            println!(
                "  {:?} at ({:.0}, {:.0}) default_prevented={}",
                event.phase,
                event.sample.position.x,
                event.sample.position.y,
                event.default_prevented
            );
        }
        report(recognizer.bridge().calls());
    }

    // Open the first row; taps must now reach it untouched.
    println!("\n== first row open: recognizer stands aside ==");
    recognizer.locator_mut().add_selector(rows[0], ".open");
    recognizer.bridge_mut().clear();
    let mut down = TouchEvent::start(200.0, 100.0, 5_000);
    let mut up = TouchEvent::end(110.0, 40.0, 5_100);
    recognizer.handle(&mut down);
    recognizer.handle(&mut up);
    println!(
        "  default_prevented: start={} end={}",
        down.default_prevented, up.default_prevented
    );
    report(recognizer.bridge().calls());

    recognizer.detach();
    recognizer.detach();
    println!("\nDetached; bridge saw {} calls in total.", recognizer.bridge().calls().len());
    Ok(())
}

fn report(calls: &[BridgeCall]) {
    if calls.is_empty() {
        println!("  -> nothing emitted");
    }
    for call in calls {
        match call {
            BridgeCall::Swipe { detail, .. } => println!(
                "  -> swipe {:?}, distance ({:.0}, {:.0}), {}ms",
                detail.direction, detail.distance.x, detail.distance.y, detail.duration
            ),
            BridgeCall::Click { target, position } => println!(
                "  -> click on element {target} at ({:.0}, {:.0})",
                position.x, position.y
            ),
            BridgeCall::Focus(target) => println!("  -> focus element {target}"),
            other => println!("  -> {other:?}"),
        }
    }
}
