//! Reveal sequencer behavioral tests - BDD style
//!
//! Naming: given_<context>_when_<action>_then_<outcome>
//!
//! Sections are driven headlessly: a simulated viewport scrolls over fixed
//! layout boxes and every sample is forwarded the way the browser host does.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::cell::Cell;
use std::rc::Rc;

use folio_core::Result;
use folio_core::content::Placement;
use folio_core::motion::choreography::{experience_header, timeline_item, timeline_progress};
use folio_core::motion::{
    Ease, HeadlessStage, IntersectOutcome, LayoutBox, MotionRuntime, Props, RevealPhase,
    SimulatedViewport, Sequencer, TriggerSpec,
};

type Section = Sequencer<HeadlessStage<&'static str>>;

fn section(name: &str) -> Section {
    Sequencer::new(name, HeadlessStage::new(), &MotionRuntime::default())
}

/// Runs frames at 60 fps until the sequencer settles or `limit_ms` passes
fn run_frames(seq: &mut Section, from_ms: f64, limit_ms: f64) -> f64 {
    let mut now = from_ms;
    while seq.tick(now) && now < from_ms + limit_ms {
        now += 1000.0 / 60.0;
    }
    now
}

// ============================================================================
// ONE-SHOT REVEALS
// ============================================================================

#[test]
fn given_revealed_item_when_scrolled_out_and_back_then_sequence_does_not_replay() -> Result<()> {
    // GIVEN: A timeline item below the fold
    let mut seq = section("experience");
    let line = seq.adopt("line");
    let dot = seq.adopt("dot");
    let content = seq.adopt("content");
    let item = LayoutBox::new(1400.0, 300.0);
    let trigger = timeline_item(line, dot, content, Placement::Left).install(&mut seq, content)?;
    let spec = seq.trigger_spec(trigger);
    assert!(spec.is_some(), "Precondition: trigger is registered");

    let mut viewport = SimulatedViewport::new(1000.0);
    let mut fired = 0;

    // WHEN: The viewer scrolls down past it, back up, and down again
    for scroll_y in [0.0, 300.0, 700.0, 1200.0, 600.0, 0.0, 700.0, 1500.0] {
        viewport.scroll_to(scroll_y);
        let outcome = seq.intersect_geometry(trigger, &viewport.geometry(&item));
        if outcome == IntersectOutcome::Fired {
            fired += 1;
        }
        run_frames(&mut seq, scroll_y * 10.0, 2000.0);
    }

    // THEN: The reveal fired exactly once and everything ends visible
    assert_eq!(fired, 1, "Reveal should fire once");
    assert_eq!(seq.phase(trigger), Some(RevealPhase::Revealed));
    assert_eq!(seq.state(content).map(|s| s.opacity), Some(1.0));
    assert_eq!(seq.state(content).map(|s| s.x), Some(0.0));
    assert_eq!(seq.state(line).map(|s| s.scale_y), Some(1.0));
    Ok(())
}

#[test]
fn given_item_below_reveal_line_when_sampled_then_it_stays_hidden() -> Result<()> {
    // GIVEN: A timeline item whose top sits at 80% of the viewport
    let mut seq = section("experience");
    let line = seq.adopt("line");
    let dot = seq.adopt("dot");
    let content = seq.adopt("content");
    let trigger = timeline_item(line, dot, content, Placement::Right).install(&mut seq, content)?;
    let viewport = SimulatedViewport::new(1000.0);

    // WHEN: The observer reports it against the "top 75%" line
    let outcome = seq.intersect_geometry(trigger, &viewport.geometry(&LayoutBox::new(800.0, 300.0)));

    // THEN: Nothing fires and the hidden state holds
    assert_eq!(outcome, IntersectOutcome::Pending);
    assert_eq!(seq.phase(trigger), Some(RevealPhase::Hidden));
    assert_eq!(seq.state(content).map(|s| s.x), Some(50.0));
    Ok(())
}

#[test]
fn given_header_when_mounted_then_initial_state_is_applied_before_first_tick() -> Result<()> {
    // GIVEN: A freshly mounted section header
    let mut seq = section("experience");
    let label = seq.adopt("label");
    let title = seq.adopt("title");
    let header = seq.adopt("header");

    // WHEN: The reveal is installed, with no frame having run
    experience_header(vec![label, title]).install(&mut seq, header)?;

    // THEN: The stage already holds the hidden state
    for node in ["label", "title"] {
        let applied = seq.stage().last_applied(&node);
        assert_eq!(applied.map(|s| s.opacity), Some(0.0), "{node} should be hidden");
        assert_eq!(applied.map(|s| s.y), Some(80.0), "{node} should be offset");
    }
    Ok(())
}

#[test]
fn given_header_when_revealed_then_children_are_staggered() -> Result<()> {
    // GIVEN: A header reveal with two children
    let mut seq = section("experience");
    let label = seq.adopt("label");
    let title = seq.adopt("title");
    let header = seq.adopt("header");
    let trigger = experience_header(vec![label, title]).install(&mut seq, header)?;

    // WHEN: It fires and 0.1 s elapses
    seq.intersect_geometry(
        trigger,
        &SimulatedViewport::new(1000.0).geometry(&LayoutBox::new(500.0, 200.0)),
    );
    seq.tick(0.0);
    seq.tick(100.0);

    // THEN: The first child has started moving, the second has not
    let label_y = seq.state(label).map(|s| s.y).unwrap_or_default();
    let title_y = seq.state(title).map(|s| s.y).unwrap_or_default();
    assert!(label_y < 80.0, "label should be rising, got {label_y}");
    assert!((title_y - 80.0).abs() < f64::EPSILON, "title waits for its stagger");
    Ok(())
}

// ============================================================================
// SCRUBBED PROGRESS
// ============================================================================

#[test]
fn given_progress_fill_when_scrolling_through_timeline_then_scale_tracks_scroll_linearly() -> Result<()> {
    // GIVEN: A 2000px timeline starting 1000px down a 1000px viewport, no lag
    let mut seq = section("experience");
    let fill = seq.adopt("fill");
    let scrub = seq.bind_scrub(timeline_progress(fill, 0.0)?)?;
    let timeline = LayoutBox::new(1000.0, 2000.0);
    let mut viewport = SimulatedViewport::new(1000.0);

    // start anchor: top at 600 => scroll 400; end: bottom at 400 => scroll 2600
    let mut samples = Vec::new();
    for scroll_y in [0.0, 400.0, 950.0, 1500.0, 2050.0, 2600.0, 4000.0] {
        // WHEN: The viewer scrolls
        viewport.scroll_to(scroll_y);
        seq.scroll(scrub, &viewport.geometry(&timeline));
        samples.push(seq.state(fill).map(|s| s.scale_y).unwrap_or(f64::NAN));
    }

    // THEN: 0 at the start anchor, 1 at the end, linear and clamped
    let expected = [0.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.0];
    for (got, want) in samples.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "expected {want}, got {got}");
    }
    assert!(samples.windows(2).all(|w| matches!(w, [a, b] if a <= b)), "monotonic");
    Ok(())
}

#[test]
fn given_lagged_progress_when_scroll_jumps_then_fill_catches_up_over_frames() -> Result<()> {
    // GIVEN: The progress fill with a one second lag
    let mut seq = section("experience");
    let fill = seq.adopt("fill");
    let scrub = seq.bind_scrub(timeline_progress(fill, 1000.0)?)?;
    let mut viewport = SimulatedViewport::new(1000.0);

    // WHEN: The viewer jumps to the end of the timeline
    viewport.scroll_to(2600.0);
    let needs_frames = seq.scroll(scrub, &viewport.geometry(&LayoutBox::new(1000.0, 2000.0)));

    // THEN: Frames are requested and the fill converges to full height
    assert!(needs_frames);
    seq.tick(0.0);
    seq.tick(16.0);
    let partway = seq.state(fill).map(|s| s.scale_y).unwrap_or_default();
    assert!(partway > 0.0 && partway < 1.0, "should lag behind, got {partway}");

    run_frames(&mut seq, 32.0, 5000.0);
    assert_eq!(seq.state(fill).map(|s| s.scale_y), Some(1.0));
    assert!(!seq.is_animating());
    Ok(())
}

#[test]
fn given_idle_progress_when_scrolling_resumes_then_fill_still_eases() -> Result<()> {
    // GIVEN: The progress fill at rest, its frame loop idle after a last tick
    let mut seq = section("experience");
    let fill = seq.adopt("fill");
    let scrub = seq.bind_scrub(timeline_progress(fill, 1000.0)?)?;
    let mut viewport = SimulatedViewport::new(1000.0);
    let timeline = LayoutBox::new(1000.0, 2000.0);
    assert!(!seq.tick(0.0));

    // WHEN: The viewer comes back five seconds later and jumps to the end
    viewport.scroll_to(2600.0);
    assert!(seq.scroll(scrub, &viewport.geometry(&timeline)));
    seq.tick(5000.0);

    // THEN: The first frame after the pause does not snap the fill
    let first = seq.state(fill).map(|s| s.scale_y).unwrap_or_default();
    assert!(first < 0.5, "should still lag behind, got {first}");

    seq.tick(5016.0);
    let second = seq.state(fill).map(|s| s.scale_y).unwrap_or_default();
    assert!(second > first && second < 1.0, "should ease upward, got {second}");
    Ok(())
}

// ============================================================================
// LIFECYCLE
// ============================================================================

#[test]
fn given_unmounted_section_when_scrolled_past_trigger_then_no_callback_runs() -> Result<()> {
    // GIVEN: A registered trigger on a section that is then unmounted
    let mut seq = section("projects");
    let card = seq.adopt("card");
    let calls = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&calls);
    let trigger = seq.register(card, TriggerSpec::from_start("top 85%")?, move |_, _| {
        counter.set(counter.get().saturating_add(1));
    })?;
    seq.unmount();

    // WHEN: The viewer scrolls the trigger into view
    let outcome = seq.intersect_geometry(
        trigger,
        &SimulatedViewport::new(1000.0).geometry(&LayoutBox::new(100.0, 400.0)),
    );

    // THEN: Nothing runs and no frames are requested
    assert_eq!(outcome, IntersectOutcome::Ignored);
    assert_eq!(calls.get(), 0);
    assert!(!seq.tick(16.0));
    Ok(())
}

#[test]
fn given_no_viewport_observer_when_section_mounts_then_content_is_shown_immediately() -> Result<()> {
    // GIVEN: A host without intersection observation
    let runtime = MotionRuntime {
        observer_available: false,
        ..MotionRuntime::default()
    };
    let mut seq = Sequencer::new("experience", HeadlessStage::new(), &runtime);
    let line = seq.adopt("line");
    let dot = seq.adopt("dot");
    let content = seq.adopt("content");

    // WHEN: The section installs its reveal
    let trigger = timeline_item(line, dot, content, Placement::Left).install(&mut seq, content)?;

    // THEN: It lands on the final state with no animation pending
    assert_eq!(seq.phase(trigger), Some(RevealPhase::Revealed));
    assert_eq!(seq.state(content).map(|s| s.opacity), Some(1.0));
    assert_eq!(seq.state(dot).map(|s| s.scale), Some(1.0));
    assert!(!seq.is_animating());
    Ok(())
}

#[test]
fn given_armed_section_when_observer_fails_later_then_fail_open_reveals_everything() -> Result<()> {
    // GIVEN: A header waiting below the fold
    let mut seq = section("experience");
    let label = seq.adopt("label");
    let header = seq.adopt("header");
    let trigger = experience_header(vec![label]).install(&mut seq, header)?;
    assert_eq!(seq.state(label).map(|s| s.opacity), Some(0.0));

    // WHEN: The host gives up on observing
    seq.fail_open();

    // THEN: The header shows in its final state
    assert_eq!(seq.phase(trigger), Some(RevealPhase::Revealed));
    assert_eq!(seq.state(label).map(|s| s.opacity), Some(1.0));
    assert_eq!(seq.state(label).map(|s| s.y), Some(0.0));
    Ok(())
}

#[test]
fn given_hovered_card_when_pointer_leaves_mid_transition_then_it_returns_to_neutral() -> Result<()> {
    // GIVEN: A card image zooming in on hover
    let mut seq = section("projects");
    let image = seq.adopt("image");
    seq.set_initial_state(&[image], &Props::new().scale(1.0))?;
    seq.tween_to(image, Props::new().scale(1.1), 0.6, Ease::Power2Out)?;
    seq.tick(0.0);
    seq.tick(200.0);

    // WHEN: The pointer leaves before the zoom finishes
    seq.tween_to(image, Props::new().scale(1.0), 0.6, Ease::Power2Out)?;
    run_frames(&mut seq, 216.0, 2000.0);

    // THEN: The leave transition wins and the image is back at rest
    assert_eq!(seq.state(image).map(|s| s.scale), Some(1.0));
    assert!(!seq.is_animating());
    Ok(())
}
