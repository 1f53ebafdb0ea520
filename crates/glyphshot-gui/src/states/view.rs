/// The screenshot currently on screen.
#[derive(Default)]
pub struct ImageView {
    pub texture: Option<egui::TextureHandle>,
    /// Original image size in pixels.
    pub image_size: Option<[usize; 2]>,
}

impl ImageView {
    pub fn clear(&mut self) {
        self.texture = None;
        self.image_size = None;
    }
}
