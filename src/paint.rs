use eframe::egui;
use egui::{Color32, Pos2, Rect, TextureHandle, TextureOptions, Vec2};

use scrawl::canvas::{Canvas, Color};
use scrawl::line;
use scrawl::polygon::Polygon;

pub struct PaintApp {
    canvas: Canvas,
    brush_color: Color32,
    last_position: Option<(i32, i32)>,
    is_drawing: bool,
    texture: Option<TextureHandle>,
    texture_dirty: bool,
}

impl PaintApp {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            brush_color: Color32::BLACK,
            last_position: None,
            is_drawing: false,
            texture: None,
            texture_dirty: true,
        }
    }

    fn brush(&self) -> Color {
        Color::new(
            self.brush_color.r(),
            self.brush_color.g(),
            self.brush_color.b(),
            self.brush_color.a(),
        )
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        if let Err(err) = self.canvas.plot(x, y, self.brush()) {
            log::warn!("dropping stroke point: {err}");
        }
        self.texture_dirty = true;
    }

    // Connecting successive pointer positions with full lines avoids the
    // gaps a fast drag would leave with single-pixel plotting.
    fn draw_line(&mut self, start: (i32, i32), end: (i32, i32)) {
        let brush = self.brush();
        if let Err(err) = line::rasterize_v2(&mut self.canvas, brush, start.0, start.1, end.0, end.1)
        {
            log::warn!("dropping stroke segment: {err}");
        }
        self.texture_dirty = true;
    }

    fn draw_demo_lines(&mut self) {
        let center_x = self.canvas.width() as i32 / 2;
        let center_y = self.canvas.height() as i32 / 2;
        let right = self.canvas.width() as i32 - 1;
        let bottom = self.canvas.height() as i32 - 1;

        // One line per variant, both from the canvas center. The first
        // stays in the octant the limited walk supports.
        let lines = [
            line::rasterize_v1(&mut self.canvas, Color::RED, center_x, center_y, right, 0),
            line::rasterize_v2(
                &mut self.canvas,
                Color::new(0, 0, 255, 255),
                center_x,
                center_y,
                right,
                bottom,
            ),
        ];
        for result in lines {
            if let Err(err) = result {
                log::warn!("demo line failed: {err}");
            }
        }

        let triangle = [
            (center_x / 2, center_y / 2),
            (center_x / 2 + 80, center_y / 2),
            (center_x / 2 + 40, center_y / 2 - 60),
        ];
        match Polygon::new(&triangle) {
            Ok(polygon) => {
                if let Err(err) = polygon.rasterize(&mut self.canvas, Color::new(0, 128, 0, 255)) {
                    log::warn!("demo polygon failed: {err}");
                }
            }
            Err(err) => log::warn!("demo polygon failed: {err}"),
        }
        self.texture_dirty = true;
    }

    fn update_texture(&mut self, ctx: &egui::Context) {
        if self.texture_dirty {
            let width = self.canvas.width();
            let height = self.canvas.height();

            let mut image_data = Vec::with_capacity(width * height * 4);
            for &packed in self.canvas.pixels() {
                let color = Color::from_packed(packed);
                image_data.extend_from_slice(&[color.r, color.g, color.b, color.a]);
            }

            let color_image =
                egui::ColorImage::from_rgba_unmultiplied([width, height], &image_data);
            self.texture = Some(ctx.load_texture("canvas", color_image, TextureOptions::NEAREST));

            self.texture_dirty = false;
        }
    }
}

impl eframe::App for PaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_texture(ctx);

        egui::SidePanel::right("tools_panel").show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.heading("Scrawl");

                ui.add_space(10.0);
                ui.label("Brush Color:");
                ui.color_edit_button_srgba(&mut self.brush_color);

                ui.separator();
                if ui.button("Clear").clicked() {
                    self.canvas.clear(Color::WHITE);
                    self.texture_dirty = true;
                }
                if ui.button("Demo Lines").clicked() {
                    self.draw_demo_lines();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas_width = self.canvas.width() as f32;
            let canvas_height = self.canvas.height() as f32;

            let (response, painter) = ui.allocate_painter(
                Vec2::new(canvas_width, canvas_height),
                egui::Sense::click_and_drag(),
            );
            let canvas_rect = response.rect;

            if let Some(texture) = &self.texture {
                painter.image(
                    texture.id(),
                    canvas_rect,
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }

            let to_canvas = egui::emath::RectTransform::from_to(
                canvas_rect,
                Rect::from_min_size(Pos2::ZERO, Vec2::new(canvas_width, canvas_height)),
            );

            if response.dragged() || response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let canvas_pos = to_canvas.transform_pos(pos);
                    let x = (canvas_pos.x as i32).clamp(0, self.canvas.width() as i32 - 1);
                    let y = (canvas_pos.y as i32).clamp(0, self.canvas.height() as i32 - 1);

                    if let Some(last_position) = self.last_position {
                        self.draw_line(last_position, (x, y));
                    } else {
                        self.draw_point(x, y);
                    }
                    self.last_position = Some((x, y));
                    self.is_drawing = true;
                }
            } else if self.is_drawing {
                self.is_drawing = false;
                self.last_position = None;
            }
        });
    }
}
