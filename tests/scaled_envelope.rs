use scalenv::{
    dsp::EnvelopeStage,
    graph::{Dispose, GraphNode, NodeExt, OscNode, OscParam, RenderCtx, ScaledEnvNode},
    PartialScaledEnvConfig, ScaledEnvConfig,
};

const SAMPLE_RATE: f32 = 48_000.0;

fn ctx() -> RenderCtx {
    RenderCtx::new(SAMPLE_RATE)
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * (1.0 + a.abs().max(b.abs()))
}

#[test]
fn positional_and_partial_construction_agree() {
    for &(a, d, s, r) in &[(0.01, 0.1, 0.7, 0.3), (0.2, 0.05, 1.0, 2.0), (0.0, 0.0, 0.0, 0.0)] {
        let positional = ScaledEnvNode::adsr(a, d, s, r);
        let partial = ScaledEnvNode::new(
            PartialScaledEnvConfig::new()
                .attack(a)
                .decay(d)
                .sustain(s)
                .release(r),
        );

        assert_eq!(positional.config(), partial.config());
        assert_eq!(positional.min(), 0.0);
        assert_eq!(positional.max(), 1.0);
        assert_eq!(positional.exponent(), 1.0);
        assert_eq!(positional.attack(), partial.attack());
        assert_eq!(positional.decay(), partial.decay());
        assert_eq!(positional.sustain(), partial.sustain());
        assert_eq!(positional.release(), partial.release());
    }
}

#[test]
fn mapper_is_affine_for_any_range() {
    let ctx = ctx();
    let ranges = [(0.0, 1.0), (200.0, 2000.0), (2000.0, 200.0), (-5.0, 5.0), (3.0, 3.0)];
    let inputs = [0.0, 0.1, 0.25, 0.5, 0.9, 1.0, 1.5, -0.5];

    for &(min, max) in &ranges {
        let mut node = ScaledEnvNode::new([0.1_f32, 0.1, 0.5, 0.1]);
        node.set_min(min);
        node.set_max(max);

        for &x in &inputs {
            let mut block = [x];
            node.output_mut().render_block(&mut block, &ctx);
            let expected = min + x * (max - min);
            assert!(
                close(block[0], expected),
                "x={x} min={min} max={max}: got {}, expected {expected}",
                block[0]
            );
        }
    }
}

#[test]
fn shaper_is_power_law() {
    let ctx = ctx();
    let inputs = [0.0, 0.01, 0.2, 0.5, 0.8, 1.0, 2.0];

    for &exponent in &[0.25, 0.5, 1.0, 2.0, 4.0] {
        let mut node = ScaledEnvNode::new(PartialScaledEnvConfig::new().exponent(exponent));

        for &x in &inputs {
            let mut block = [x];
            node.input_mut().render_block(&mut block, &ctx);
            assert!(close(block[0], x.powf(exponent)), "{x}^{exponent} gave {}", block[0]);
        }
    }

    let mut identity = ScaledEnvNode::new(PartialScaledEnvConfig::new().exponent(1.0));
    let mut block = inputs;
    identity.input_mut().render_block(&mut block, &ctx);
    assert_eq!(block, inputs);
}

#[test]
fn reads_are_idempotent_and_writes_visible() {
    let mut node = ScaledEnvNode::new(PartialScaledEnvConfig::new());

    assert_eq!(node.min(), node.min());
    assert_eq!(node.max(), node.max());
    assert_eq!(node.exponent(), node.exponent());

    node.set_min(5.0);
    assert_eq!(node.min(), 5.0);

    node.set_exponent(2.0);
    assert_eq!(node.exponent(), 2.0);

    node.set_max(-1.0);
    assert_eq!(node.max(), -1.0);
}

#[test]
fn sweep_reaches_range_ends() {
    let ctx = ctx();
    let mut node = ScaledEnvNode::new(
        PartialScaledEnvConfig::new()
            .attack(0.2)
            .range(200.0, 2000.0)
            .exponent(1.0),
    );

    // generator at 0
    let mut block = vec![0.0; 128];
    node.render_block(&mut block, &ctx);
    assert_eq!(node.value(), 200.0);
    assert!(block.iter().all(|&s| s == 200.0));

    // generator at its peak of 1.0, the sample attack hands over to decay
    node.trigger_attack(&ctx);
    let mut sample = [0.0];
    while node.stage() == EnvelopeStage::Attack {
        node.render_block(&mut sample, &ctx);
    }
    assert_eq!(node.value(), 2000.0);

    // released all the way back down
    node.trigger_release(&ctx);
    let mut tail = vec![0.0; 512];
    while node.is_active() {
        node.render_block(&mut tail, &ctx);
    }
    node.render_block(&mut tail, &ctx);
    assert_eq!(node.value(), 200.0);
}

#[test]
fn full_sustain_holds_max() {
    let ctx = ctx();
    let mut node = ScaledEnvNode::new(
        PartialScaledEnvConfig::new()
            .attack(0.2)
            .sustain(1.0)
            .range(200.0, 2000.0),
    );

    node.note_on(&ctx);
    let mut block = vec![0.0; 1024];
    for _ in 0..12 {
        node.render_block(&mut block, &ctx);
    }

    assert_eq!(node.stage(), EnvelopeStage::Sustain);
    assert!(block.iter().all(|&s| s == 2000.0));
}

#[test]
fn reversed_range_sweeps_downward() {
    let ctx = ctx();
    let mut node = ScaledEnvNode::new(
        PartialScaledEnvConfig::new()
            .attack(0.001)
            .sustain(1.0)
            .range(2000.0, 200.0),
    );

    let mut block = vec![0.0; 256];
    node.render_block(&mut block, &ctx);
    assert_eq!(node.value(), 2000.0);

    node.note_on(&ctx);
    node.render_block(&mut block, &ctx);
    assert_eq!(node.value(), 200.0);
}

#[test]
fn drives_oscillator_frequency() {
    let ctx = ctx();
    let sweep = ScaledEnvNode::new(
        PartialScaledEnvConfig::new()
            .attack(0.001)
            .sustain(1.0)
            .range(200.0, 2000.0),
    );
    let mut voice = OscNode::sine(440.0).drive(sweep, OscParam::Frequency);
    let mut block = vec![0.0; 256];

    voice.render_block(&mut block, &ctx);
    assert_eq!(voice.target().frequency(), 200.0);

    voice.note_on(&ctx);
    voice.render_block(&mut block, &ctx);
    voice.render_block(&mut block, &ctx);
    assert_eq!(voice.target().frequency(), 2000.0);
}

#[test]
fn config_survives_resolution_unchanged() {
    let config = ScaledEnvConfig::resolve(PartialScaledEnvConfig::new().range(10.0, 20.0));
    let node = ScaledEnvNode::from_config(config);

    assert_eq!(*node.config(), config);
    assert_eq!(node.min(), 10.0);
    assert_eq!(node.max(), 20.0);
}

#[test]
fn trigger_after_dispose_does_not_panic() {
    let ctx = ctx();
    let mut node = ScaledEnvNode::adsr(0.01, 0.1, 0.5, 0.2);
    node.trigger_attack(&ctx);

    node.dispose();
    node.trigger_release(&ctx);
    node.note_off(&ctx);

    assert!(!node.is_active());
}

#[cfg(feature = "rtrb")]
mod handle {
    use super::*;
    use scalenv::Error;
    use std::thread;

    #[test]
    fn triggers_across_threads() {
        let (mut node, mut handle) = ScaledEnvNode::with_handle(
            PartialScaledEnvConfig::new()
                .attack(0.001)
                .range(200.0, 2000.0),
        );

        thread::spawn(move || {
            handle.note_on().expect("queue has room");
        })
        .join()
        .expect("sender thread");

        let mut block = vec![0.0; 256];
        node.render_block(&mut block, &ctx());

        assert!(node.is_active());
        assert!(node.value() > 200.0);
    }

    #[test]
    fn release_after_dispose_reports_disconnect() {
        let (mut node, mut handle) = ScaledEnvNode::with_handle([0.01_f32, 0.1, 0.5, 0.2]);
        handle.note_on().expect("queue has room");

        node.dispose();

        assert_eq!(handle.note_off(), Err(Error::Disconnected));
        assert!(handle.is_disconnected());
    }
}
