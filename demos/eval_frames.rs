use cadence::{Composition, FrameIndex, storyboard};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let comp: Composition = storyboard::explainer()?;
    for r in comp.registrations() {
        println!("{:<14} start {:>5}  duration {:>4}", r.scene_id, r.start.0, r.duration);
    }

    for f in [0u64, 25, 170, 180, 600, 1200, 2099, 2100] {
        let state = comp.evaluate(FrameIndex(f));
        match state.current() {
            Some(scene) => println!(
                "frame {f}: {} local {} {:?} opacity {:.3}, {} elements",
                scene.scene_id,
                scene.local_frame,
                scene.phase,
                scene.opacity,
                scene.elements.len()
            ),
            None => println!("frame {f}: past the end"),
        }
    }

    Ok(())
}
