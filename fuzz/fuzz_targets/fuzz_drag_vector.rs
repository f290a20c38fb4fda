#![no_main]

use libfuzzer_sys::fuzz_target;
use rubberband_core::{DragVector, Rect, intersects};

fuzz_target!(|values: [f32; 8]| {
    let [x, y, mx, my, sx, sy, w, h] = values.map(f64::from);
    if [x, y, mx, my, sx, sy, w, h].iter().any(|v| !v.is_finite()) {
        return;
    }

    let drag = DragVector::new(x, y, mx, my);
    let scroll = DragVector::new(0.0, 0.0, sx, sy);
    let rect = drag.add(&scroll).to_rect();

    assert!(rect.width >= 0.0 && rect.height >= 0.0);
    assert!(intersects(&rect, &rect));
    let bounds = Rect::new(0.0, 0.0, w.abs(), h.abs());
    assert_eq!(intersects(&rect, &bounds), intersects(&bounds, &rect));

    let clamped = drag.clamp_to(&bounds);
    assert_eq!(clamped.anchor(), drag.anchor());
    assert!(clamped.magnitude_x <= drag.magnitude_x);
    assert!(clamped.magnitude_y <= drag.magnitude_y);
});
