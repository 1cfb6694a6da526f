pub trait Surface {
    fn clear_rect(&self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&self);
    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    fn set_fill_style(&self, color: &str);
    fn set_stroke_style(&self, color: &str);
    fn set_global_alpha(&self, alpha: f64);
    fn fill(&self);
    fn stroke(&self);
}

/// Everything the field needs from the page.
pub trait Host {
    type Surface: Surface;

    // None once the canvas is gone
    fn surface(&self) -> Option<Self::Surface>;
    fn viewport(&self) -> (f64, f64);
    fn resize_surface(&self, w: f64, h: f64);
    // Timestamp in ms
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>);
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
    fn set_style_var(&self, name: &str, value: &str);
    fn log(&self, message: &str);
}
