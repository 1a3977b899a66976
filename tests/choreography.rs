//! Whole reductions driven through a recording host.

use numplane::animation::{FrameDriver, FrameSignal};
use numplane::frame::CoordinateFrame;
use numplane::options::BusyInputPolicy;
use numplane::session::{RotateDirection, ZoomDirection};
use numplane::{Complex, FrameSnapshot, Options, PlaneCommand, PlaneSession};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Records every presented frame and injects input on a chosen frame.
#[derive(Default)]
struct RecordingHost {
    frames: Vec<FrameSnapshot>,
    inject_at: usize,
    inject: Vec<PlaneCommand>,
}

impl FrameDriver for RecordingHost {
    fn present(&mut self, frame: &FrameSnapshot) -> FrameSignal {
        self.frames.push(frame.clone());
        FrameSignal::Continue
    }

    fn poll_input(&mut self) -> Vec<PlaneCommand> {
        if self.frames.len() == self.inject_at {
            std::mem::take(&mut self.inject)
        } else {
            Vec::new()
        }
    }
}

fn session_with(real_mode: bool, values: &[f64]) -> PlaneSession {
    let mut options = Options::default();
    options.plane.real_mode = real_mode;
    let mut session = PlaneSession::new(options).unwrap();
    for v in values {
        let _ = session.place_value(Complex::real(*v));
    }
    session
}

fn values(session: &PlaneSession) -> Vec<Complex> {
    session.scene().points().values()
}

#[test]
fn two_plus_three_is_five() {
    let mut session = session_with(false, &[2.0, 3.0]);
    let mut host = RecordingHost::default();
    let signal = session.execute(PlaneCommand::Add, &mut host).unwrap();
    assert_eq!(signal, FrameSignal::Continue);
    assert_eq!(values(&session), vec![Complex::real(5.0)]);
    let report = session.last_report().unwrap();
    assert_eq!(report.steps, 1);
    assert!(!report.aborted);
    assert!(!host.frames.is_empty());
}

#[test]
fn two_times_three_is_six() {
    let mut session = session_with(false, &[2.0, 3.0]);
    let mut host = RecordingHost::default();
    let _ = session.execute(PlaneCommand::Multiply, &mut host).unwrap();
    assert_eq!(values(&session), vec![Complex::real(6.0)]);
}

#[test]
fn zero_absorbs_the_product_in_one_step() {
    let mut session = session_with(false, &[0.0, 5.0]);
    let mut host = RecordingHost::default();
    let _ = session.execute(PlaneCommand::Multiply, &mut host).unwrap();
    assert_eq!(values(&session), vec![Complex::ZERO]);
    let report = session.last_report().unwrap();
    assert_eq!(report.steps, 1);
    assert!(report.dropped.is_empty());
}

#[test]
fn overflowing_product_drops_the_offending_point() {
    let mut options = Options::default();
    options.plane.half_range = 100.0;
    let mut session = PlaneSession::new(options).unwrap();
    let _ = session.place_value(Complex::real(1e99));
    let _ = session.place_value(Complex::real(100.0));
    let mut host = RecordingHost::default();
    let _ = session.execute(PlaneCommand::Multiply, &mut host).unwrap();
    assert_eq!(values(&session), vec![Complex::real(100.0)]);
    let report = session.last_report().unwrap();
    assert_eq!(report.dropped, vec![Complex::real(1e99)]);
    assert_eq!(report.steps, 0);
}

#[test]
fn real_line_product_with_a_negative_flips_through_the_extreme() {
    let mut session = session_with(true, &[-2.0, 3.0]);
    let mut host = RecordingHost::default();
    let _ = session.execute(PlaneCommand::Multiply, &mut host).unwrap();
    assert_eq!(values(&session), vec![Complex::real(-6.0)]);

    let signs: Vec<bool> = host
        .frames
        .iter()
        .map(|f| f.state.half_range.is_sign_negative())
        .collect();
    let flips = signs.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(flips, 1);
    assert!(host.frames.iter().all(|f| f.state.phase == 0.0));
    let widest = host
        .frames
        .iter()
        .map(|f| f.state.half_range.abs())
        .fold(0.0, f64::max);
    assert!(widest > 100.0);
}

#[test]
fn complex_product_rotates_the_view() {
    let mut options = Options::default();
    options.plane.real_mode = false;
    let mut session = PlaneSession::new(options).unwrap();
    let _ = session.place_value(Complex::new(0.0, 1.0));
    let _ = session.place_value(Complex::new(0.0, 2.0));
    let mut host = RecordingHost::default();
    let _ = session.execute(PlaneCommand::Multiply, &mut host).unwrap();
    let result = session.last_report().unwrap().result.unwrap();
    assert!(result.approx_eq(Complex::real(-2.0)));
    assert!(host.frames.iter().any(|f| f.state.phase != 0.0));
}

#[test]
fn longer_reductions_fold_everything() {
    let mut session = session_with(false, &[1.0, 2.0, 3.0, 4.0, -5.0]);
    let mut host = RecordingHost::default();
    let _ = session.execute(PlaneCommand::Add, &mut host).unwrap();
    let report = session.last_report().unwrap();
    assert_eq!(report.steps, 4);
    assert!(report.result.unwrap().approx_eq(Complex::real(5.0)));

    let mut session = session_with(false, &[1.5, -2.0, 4.0]);
    let _ = session.execute(PlaneCommand::Multiply, &mut host).unwrap();
    assert!(session.last_report().unwrap().result.unwrap().approx_eq(Complex::real(-12.0)));
}

#[test]
fn markers_only_appear_during_pairwise_steps() {
    let mut session = session_with(false, &[2.0, 3.0]);
    let mut host = RecordingHost::default();
    let _ = session.execute(PlaneCommand::Add, &mut host).unwrap();
    let with_markers = host.frames.iter().filter(|f| f.markers.len() == 2).count();
    assert!(with_markers > 0);
    assert!(host.frames.last().unwrap().markers.is_empty());
    assert!(host.frames.iter().all(|f| f.markers.is_empty() || f.markers.len() == 2));
}

#[test]
fn input_during_animation_is_queued_then_applied() {
    let mut session = session_with(false, &[2.0, 3.0]);
    let mut host = RecordingHost {
        inject_at: 3,
        inject: vec![
            PlaneCommand::Zoom {
                direction: ZoomDirection::In,
                active: true,
            },
            PlaneCommand::Rotate {
                direction: RotateDirection::Clockwise,
            },
        ],
        ..RecordingHost::default()
    };
    let _ = session.execute(PlaneCommand::Add, &mut host).unwrap();
    // nothing changed the view mid-animation
    assert!(host.frames.iter().all(|f| f.state.phase == 0.0));
    assert!(session.is_zooming());
    assert!((session.frame().phase() - (std::f64::consts::TAU - 0.01)).abs() < 1e-9);
}

#[test]
fn dropped_input_never_runs() {
    let mut options = Options::default();
    options.input.busy_input = BusyInputPolicy::Drop;
    let mut session = PlaneSession::new(options).unwrap();
    let _ = session.place_value(Complex::real(2.0));
    let _ = session.place_value(Complex::real(3.0));
    let mut host = RecordingHost {
        inject_at: 3,
        inject: vec![PlaneCommand::Multiply],
        ..RecordingHost::default()
    };
    let _ = session.execute(PlaneCommand::Add, &mut host).unwrap();
    assert_eq!(values(&session), vec![Complex::real(5.0)]);
}

#[test]
fn quit_aborts_the_reduction() {
    let mut session = session_with(false, &[2.0, 3.0, 4.0]);
    let mut presented = 0;
    let mut host = |_: &FrameSnapshot| {
        presented += 1;
        if presented == 30 {
            FrameSignal::Quit
        } else {
            FrameSignal::Continue
        }
    };
    let signal = session.execute(PlaneCommand::Add, &mut host).unwrap();
    assert_eq!(signal, FrameSignal::Quit);
    assert_eq!(presented, 30);
    assert!(session.last_report().unwrap().aborted);
}

#[test]
fn home_after_a_reduction() {
    let mut session = session_with(false, &[3.0, 4.0]);
    let mut host = RecordingHost::default();
    let _ = session.execute(PlaneCommand::Add, &mut host).unwrap();
    assert!(!session.frame().offset().is_zero());
    let _ = session.execute(PlaneCommand::Home, &mut host).unwrap();
    let frame: &CoordinateFrame = session.frame();
    assert!(frame.offset().is_zero());
    assert_eq!(frame.half_range(), 5.0);
    assert_eq!(frame.spacing(), 1.0);
}

#[test]
fn pixel_round_trip_under_random_views() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = session_with(false, &[]);
    let mut idle = |_: &FrameSnapshot| FrameSignal::Continue;
    for _ in 0..100 {
        let command = match rng.random_range(0..3) {
            0 => PlaneCommand::Pan {
                delta: glam::DVec2::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)),
            },
            1 => PlaneCommand::Rotate {
                direction: RotateDirection::CounterClockwise,
            },
            _ => PlaneCommand::Resize {
                width: rng.random_range(200..1200),
                height: rng.random_range(200..1200),
            },
        };
        let _ = session.execute(command, &mut idle).unwrap();
        let frame = session.frame();
        let viewport = frame.viewport();
        let (px, py) = (
            rng.random_range(0.0..viewport.width),
            rng.random_range(0.0..viewport.height),
        );
        let back = frame.plane_to_pixel_exact(frame.pixel_to_plane(px, py));
        assert!((back.x - px).abs() <= 1.0 && (back.y - py).abs() <= 1.0);
    }
}
