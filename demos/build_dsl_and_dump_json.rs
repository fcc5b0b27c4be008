use cadence::{
    Canvas, Channel, CompositionBuilder, ElementSpec, ElementTiming, Fps, FrameIndex,
    SceneEnvelope, SceneSpec, SpringConfig,
};

fn main() -> anyhow::Result<()> {
    let title = ElementSpec::new("title", ElementTiming::spring(0, SpringConfig::DEFAULT))
        .channel(Channel::opacity())?
        .channel(Channel::translate_y(30.0))?;
    let badge = ElementSpec::new("badge", ElementTiming::spring(45, SpringConfig::BOUNCY))
        .channel(Channel::opacity())?
        .channel(Channel::scale(0.0))?;

    let intro = SceneSpec::new("intro", 90)?
        .envelope(SceneEnvelope {
            overlap: 15,
            ..SceneEnvelope::default()
        })
        .element(title)?
        .element(badge)?;
    let outro = SceneSpec::new("outro", 60)?;

    let comp = CompositionBuilder::new(
        Fps::new(30, 1)?,
        Canvas {
            width: 640,
            height: 360,
        },
    )
    .scene(intro)?
    .scene(outro)?
    .build()?;

    let state = comp.evaluate(FrameIndex(95));
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
