use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  trace
};

use crate::menu::MenuGroupId;

/// Width of the design mock the
/// chrome bar was drawn against.
/// Hit bands are fractions of this,
/// so regions stay proportionally
/// stable as the window resizes.
pub const REFERENCE_WIDTH: f64 =
  600.0;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub enum ChromeControl {
  Menu(MenuGroupId),
  Minimize,
  Maximize,
  Close
}

#[derive(Debug, Clone, Copy)]
pub struct HitBand {
  pub start:   f64,
  pub end:     f64,
  pub control: ChromeControl
}

/// Named band table for the chrome
/// bar. Gaps between the XP tab and
/// the minimize icon hit nothing.
pub const HIT_BANDS: [HitBand; 8] = [
  HitBand {
    start:   0.0,
    end:     100.0 / REFERENCE_WIDTH,
    control: ChromeControl::Menu(
      MenuGroupId::File
    )
  },
  HitBand {
    start:   100.0 / REFERENCE_WIDTH,
    end:     200.0 / REFERENCE_WIDTH,
    control: ChromeControl::Menu(
      MenuGroupId::Settings
    )
  },
  HitBand {
    start:   200.0 / REFERENCE_WIDTH,
    end:     300.0 / REFERENCE_WIDTH,
    control: ChromeControl::Menu(
      MenuGroupId::Themes
    )
  },
  HitBand {
    start:   300.0 / REFERENCE_WIDTH,
    end:     400.0 / REFERENCE_WIDTH,
    control: ChromeControl::Menu(
      MenuGroupId::Tools
    )
  },
  HitBand {
    start:   400.0 / REFERENCE_WIDTH,
    end:     500.0 / REFERENCE_WIDTH,
    control: ChromeControl::Menu(
      MenuGroupId::Xp
    )
  },
  HitBand {
    start:   515.0 / REFERENCE_WIDTH,
    end:     540.0 / REFERENCE_WIDTH,
    control: ChromeControl::Minimize
  },
  HitBand {
    start:   540.0 / REFERENCE_WIDTH,
    end:     570.0 / REFERENCE_WIDTH,
    control: ChromeControl::Maximize
  },
  HitBand {
    start:   570.0 / REFERENCE_WIDTH,
    end:     1.0,
    control: ChromeControl::Close
  },
];

/// Maps a pointer position, given as
/// a fraction of the chrome bar's
/// width, to the control under it.
/// Bands are half-open except the
/// close band, which includes the
/// right edge.
pub fn hit_test(
  x_ratio: f64
) -> Option<ChromeControl> {
  for band in &HIT_BANDS {
    let inside = x_ratio >= band.start
      && (x_ratio < band.end
        || (band.end >= 1.0
          && x_ratio <= band.end));
    if inside {
      trace!(
        x_ratio,
        control = ?band.control,
        "chrome hit"
      );
      return Some(band.control);
    }
  }
  trace!(x_ratio, "chrome miss");
  None
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Point {
  pub x: i32,
  pub y: i32
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Geometry {
  pub x:      i32,
  pub y:      i32,
  pub width:  u32,
  pub height: u32
}

/// What the host window should do
/// after a maximize toggle. The
/// unsaved variant is the guard for
/// a restore with no captured
/// placement: leave maximized state
/// but skip reapplying geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaximizeTransition {
  Maximize,
  Restore(Geometry),
  RestoreUnsaved
}

/// Emulates the window manager for a
/// borderless window: drag-to-move
/// bookkeeping and the two-state
/// maximize machine. Every operation
/// is geometry bookkeeping only;
/// invalid states are no-ops, never
/// faults.
#[derive(Debug, Default)]
pub struct WindowChrome {
  drag_anchor:      Option<Point>,
  maximized:        bool,
  restore_geometry: Option<Geometry>
}

impl WindowChrome {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_maximized(&self) -> bool {
    self.maximized
  }

  pub fn drag_active(&self) -> bool {
    self.drag_anchor.is_some()
  }

  /// Records the pointer offset
  /// within the window. Overwrites
  /// any prior anchor; one pointer,
  /// one drag session.
  pub fn start_drag(
    &mut self,
    pointer_in_window: Point
  ) {
    self.drag_anchor =
      Some(pointer_in_window);
    trace!(
      ?pointer_in_window,
      "drag anchor set"
    );
  }

  /// New window origin for the
  /// current pointer position, or
  /// `None` when no drag is active
  /// or the window is maximized
  /// (maximized windows do not move
  /// freely).
  pub fn drag_to(
    &self,
    pointer_on_screen: Point
  ) -> Option<Point> {
    if self.maximized {
      return None;
    }
    let anchor = self.drag_anchor?;
    Some(Point {
      x: pointer_on_screen.x
        - anchor.x,
      y: pointer_on_screen.y
        - anchor.y
    })
  }

  pub fn end_drag(&mut self) {
    self.drag_anchor = None;
  }

  /// Normal -> Maximized saves the
  /// current placement; Maximized ->
  /// Normal consumes it exactly
  /// once.
  pub fn toggle_maximize(
    &mut self,
    current: Geometry
  ) -> MaximizeTransition {
    if self.maximized {
      self.maximized = false;
      match self
        .restore_geometry
        .take()
      {
        | Some(geometry) => {
          debug!(
            ?geometry,
            "restoring window"
          );
          MaximizeTransition::Restore(
            geometry
          )
        }
        | None => {
          debug!(
            "restore without saved \
             geometry; skipping \
             reapply"
          );
          MaximizeTransition::RestoreUnsaved
        }
      }
    } else {
      self.restore_geometry =
        Some(current);
      self.maximized = true;
      debug!(
        saved = ?current,
        "maximizing window"
      );
      MaximizeTransition::Maximize
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    ChromeControl,
    Geometry,
    MaximizeTransition,
    Point,
    WindowChrome,
    hit_test
  };
  use crate::menu::MenuGroupId;

  #[test]
  fn hit_test_matches_band_table() {
    assert_eq!(
      hit_test(0.05),
      Some(ChromeControl::Menu(
        MenuGroupId::File
      ))
    );
    assert_eq!(
      hit_test(0.60),
      Some(ChromeControl::Menu(
        MenuGroupId::Tools
      ))
    );
    assert_eq!(
      hit_test(0.87),
      Some(ChromeControl::Minimize)
    );
    assert_eq!(
      hit_test(0.92),
      Some(ChromeControl::Maximize)
    );
    assert_eq!(
      hit_test(0.96),
      Some(ChromeControl::Close)
    );
    assert_eq!(
      hit_test(1.0),
      Some(ChromeControl::Close)
    );
  }

  #[test]
  fn hit_test_gap_hits_nothing() {
    // between the XP tab and the
    // minimize icon
    assert_eq!(hit_test(0.84), None);
  }

  #[test]
  fn drag_math_uses_the_anchor() {
    let mut chrome =
      WindowChrome::new();
    assert_eq!(
      chrome.drag_to(Point {
        x: 500,
        y: 400
      }),
      None
    );

    chrome.start_drag(Point {
      x: 40,
      y: 12
    });
    assert_eq!(
      chrome.drag_to(Point {
        x: 500,
        y: 400
      }),
      Some(Point { x: 460, y: 388 })
    );

    chrome.end_drag();
    assert_eq!(
      chrome.drag_to(Point {
        x: 500,
        y: 400
      }),
      None
    );
  }

  #[test]
  fn maximized_window_does_not_drag()
  {
    let mut chrome =
      WindowChrome::new();
    chrome.start_drag(Point {
      x: 1,
      y: 1
    });
    chrome.toggle_maximize(Geometry {
      x:      10,
      y:      20,
      width:  600,
      height: 800
    });
    assert_eq!(
      chrome.drag_to(Point {
        x: 300,
        y: 300
      }),
      None
    );
  }

  #[test]
  fn maximize_round_trips_geometry()
  {
    let mut chrome =
      WindowChrome::new();
    let placement = Geometry {
      x:      64,
      y:      48,
      width:  600,
      height: 800
    };

    assert_eq!(
      chrome
        .toggle_maximize(placement),
      MaximizeTransition::Maximize
    );
    assert!(chrome.is_maximized());

    // the geometry passed here is
    // whatever the maximized window
    // reports; it must not leak into
    // the restore
    let maximized = Geometry {
      x:      0,
      y:      0,
      width:  1920,
      height: 1080
    };
    assert_eq!(
      chrome
        .toggle_maximize(maximized),
      MaximizeTransition::Restore(
        placement
      )
    );
    assert!(!chrome.is_maximized());
  }

  #[test]
  fn restore_is_consumed_once() {
    let mut chrome =
      WindowChrome::new();
    let placement = Geometry {
      x:      0,
      y:      0,
      width:  600,
      height: 800
    };
    chrome.toggle_maximize(placement);
    chrome.toggle_maximize(placement);

    // force the guard path
    chrome.maximized = true;
    assert_eq!(
      chrome
        .toggle_maximize(placement),
      MaximizeTransition::RestoreUnsaved
    );
  }
}
