//! Built-in eight-scene product explainer: 1920x1080 at 30 fps, 2100 frames.
//!
//! Each scene cuts in and fades out over its last 20 frames. Element delays are scene-local.

use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, RangeMap};
use crate::animation::primitives::stagger_delay;
use crate::animation::spring::SpringConfig;
use crate::compose::element::{Channel, ElementSpec, ElementTiming, Property};
use crate::compose::scene::SceneSpec;
use crate::composition::dsl::CompositionBuilder;
use crate::composition::model::Composition;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::CadenceResult;
use crate::timeline::envelope::SceneEnvelope;

/// Scene ids and durations in playback order.
pub const EXPLAINER_SCENES: [(&str, u64); 8] = [
    ("problem", 180),
    ("insight", 180),
    ("connect", 240),
    ("protection", 300),
    ("confirmation", 300),
    ("outcomes", 450),
    ("value", 300),
    ("closing", 150),
];

const SCENE_FADE_OUT: u64 = 20;

/// Build the explainer composition.
pub fn explainer() -> CadenceResult<Composition> {
    let fps = Fps::new(30, 1)?;
    let canvas = Canvas {
        width: 1920,
        height: 1080,
    };
    [
        problem()?,
        insight()?,
        connect()?,
        protection()?,
        confirmation()?,
        outcomes()?,
        value()?,
        closing()?,
    ]
    .into_iter()
    .try_fold(CompositionBuilder::new(fps, canvas), |b, s| b.scene(s))?
    .build()
}

fn scene(index: usize, elements: Vec<ElementSpec>) -> CadenceResult<SceneSpec> {
    let (id, duration) = EXPLAINER_SCENES[index];
    let envelope = SceneEnvelope {
        fade_in: 0,
        fade_out: SCENE_FADE_OUT,
        overlap: 0,
    };
    elements
        .into_iter()
        .try_fold(SceneSpec::new(id, duration)?.envelope(envelope), |s, e| s.element(e))
}

fn element(
    id: &str,
    timing: ElementTiming,
    channels: impl IntoIterator<Item = Channel>,
) -> CadenceResult<ElementSpec> {
    channels
        .into_iter()
        .try_fold(ElementSpec::new(id, timing), ElementSpec::channel)
}

fn sprung(delay: i64) -> ElementTiming {
    ElementTiming::spring(delay, SpringConfig::DEFAULT)
}

// Opacity plus a vertical settle, the most common entrance.
fn rise(id: &str, delay: i64, from_y: f64) -> CadenceResult<ElementSpec> {
    element(
        id,
        sprung(delay),
        [Channel::opacity(), Channel::translate_y(from_y)],
    )
}

fn grow(id: &str, timing: ElementTiming, from_scale: f64) -> CadenceResult<ElementSpec> {
    element(id, timing, [Channel::opacity(), Channel::scale(from_scale)])
}

fn problem() -> CadenceResult<SceneSpec> {
    scene(
        0,
        vec![
            element(
                "title",
                ElementTiming::tween(0, 20, Ease::Linear),
                [Channel::opacity()],
            )?,
            grow("calendar", sprung(25), 0.9)?,
            element(
                "no_show_counter",
                ElementTiming::tween(60, 60, Ease::Linear),
                [Channel::value("count", 0.0, 127.0).rounded()],
            )?,
            grow("message", sprung(90), 0.9)?,
        ],
    )
}

fn insight() -> CadenceResult<SceneSpec> {
    scene(
        1,
        vec![
            rise("title", 0, 30.0)?,
            grow("event_card", sprung(20), 0.8)?,
            element(
                "highlight",
                ElementTiming::spring(60, SpringConfig::SNAPPY),
                [Channel::opacity()],
            )?,
            element(
                "arrow",
                ElementTiming::spring(70, SpringConfig::new(15.0, 100.0, 1.0)?),
                [Channel::opacity(), Channel::translate_x(-20.0)],
            )?,
            rise("insight", 90, 20.0)?,
        ],
    )
}

fn connect() -> CadenceResult<SceneSpec> {
    scene(
        2,
        vec![
            grow("logo", sprung(0), 0.8)?,
            rise("headline", 30, 20.0)?,
            element(
                "connect_button",
                ElementTiming::spring(60, SpringConfig::new(15.0, 80.0, 1.0)?),
                [Channel::opacity(), Channel::translate_y(20.0)],
            )?,
            grow("calendar", sprung(80), 0.8)?,
            element(
                "sync_line",
                ElementTiming::tween(90, 30, Ease::Linear),
                [Channel::value("length", 0.0, 1.0)],
            )?,
            grow(
                "check",
                ElementTiming::spring(140, SpringConfig::new(10.0, 150.0, 1.0)?),
                0.0,
            )?,
            rise("connected", 160, 20.0)?,
        ],
    )
}

fn protection() -> CadenceResult<SceneSpec> {
    scene(
        3,
        vec![
            rise("title", 0, 30.0)?,
            grow("dashboard", sprung(20), 0.9)?,
            element(
                "protection_panel",
                sprung(80),
                [Channel::opacity(), Channel::translate_x(60.0)],
            )?,
            grow(
                "protected_badge",
                ElementTiming::spring(160, SpringConfig::SNAPPY),
                0.0,
            )?,
            rise("explanation", 200, 20.0)?,
        ],
    )
}

fn confirmation() -> CadenceResult<SceneSpec> {
    // Button swells to 1.1 half way through its press and settles back.
    let press = RangeMap::new(
        vec![0.0, 0.5, 1.0],
        vec![1.0, 1.1, 1.0],
        InterpolateOpts::clamped(),
    )?;
    scene(
        4,
        vec![
            rise("title", 0, 30.0)?,
            grow("booking_card", sprung(20), 0.9)?,
            element(
                "confirm_button",
                ElementTiming::tween(60, 30, Ease::Linear),
                [Channel::new(Property::Scale, press)],
            )?,
            element(
                "click",
                ElementTiming::spring(90, SpringConfig::new(20.0, 200.0, 1.0)?),
                [Channel::opacity()],
            )?,
            element(
                "email_preview",
                sprung(110),
                [Channel::opacity(), Channel::translate_x(100.0)],
            )?,
            grow("sent_badge", sprung(150), 0.0)?,
            rise("note", 180, 20.0)?,
        ],
    )
}

fn outcomes() -> CadenceResult<SceneSpec> {
    scene(
        5,
        vec![
            rise("title", 0, 30.0)?,
            element(
                "split",
                sprung(30),
                [Channel::value("height", 0.0, 600.0)],
            )?,
            element(
                "left_outcome",
                sprung(60),
                [Channel::opacity(), Channel::translate_x(-40.0)],
            )?,
            element(
                "right_outcome",
                sprung(90),
                [Channel::opacity(), Channel::translate_x(40.0)],
            )?,
            element("details", sprung(150), [Channel::opacity()])?,
            element("decision", sprung(200), [Channel::opacity()])?,
            rise("key_point", 280, 20.0)?,
        ],
    )
}

fn value() -> CadenceResult<SceneSpec> {
    let mut elements = vec![rise("title", 0, 30.0)?];
    for (plan, delay, features) in [("starter", 30, 4), ("pro", 50, 5)] {
        elements.push(element(
            &format!("{plan}_card"),
            sprung(delay),
            [
                Channel::opacity(),
                Channel::scale(0.9),
                Channel::translate_y(30.0),
            ],
        )?);
        for i in 0..features {
            elements.push(element(
                &format!("{plan}_feature_{i}"),
                sprung(stagger_delay(i, delay + 20, 5)),
                [Channel::opacity()],
            )?);
        }
    }
    elements.push(rise("value_line", 180, 20.0)?);
    scene(6, elements)
}

fn closing() -> CadenceResult<SceneSpec> {
    scene(
        7,
        vec![
            grow("logo", sprung(10), 0.8)?,
            rise("tagline", 40, 20.0)?,
            grow(
                "cta",
                ElementTiming::spring(70, SpringConfig::SNAPPY),
                0.9,
            )?,
            element("url", sprung(100), [Channel::opacity()])?,
        ],
    )
}

#[cfg(test)]
#[path = "../tests/unit/storyboard.rs"]
mod tests;
