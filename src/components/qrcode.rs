use crate::prelude::*;

use core::fmt::Write;

use qrcode::{
    render::{Canvas, Pixel},
    types::{Color as ModuleColor, QrError},
    QrCode,
};

use crate::utils::CCStr;

/// A QR code as a single SVG path, one unit per module
#[derive(Debug, Clone, PartialEq, Eq)]
struct QRCodeSvg {
    width: u32,
    path: String,
}
impl Canvas for QRCodeSvg {
    type Pixel = DummyPixel;

    type Image = Self;

    fn new(width: u32, _height: u32, _dark_pixel: Self::Pixel, _light_pixel: Self::Pixel) -> Self {
        Self {
            width,
            path: String::new(),
        }
    }

    fn draw_dark_pixel(&mut self, x: u32, y: u32) {
        self.draw_dark_rect(x, y, 1, 1);
    }
    fn draw_dark_rect(&mut self, left: u32, top: u32, width: u32, height: u32) {
        // Writing into a String cannot fail
        let _ = write!(self.path, "M{left} {top}h{width}v{height}H{left}Z");
    }

    fn into_image(self) -> Self::Image {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DummyPixel;
impl Pixel for DummyPixel {
    type Image = QRCodeSvg;
    type Canvas = QRCodeSvg;

    fn default_color(color: ModuleColor) -> Self {
        color.select(Self, Self)
    }
    fn default_unit_size() -> (u32, u32) {
        (1, 1)
    }
}

fn render_qr_svg(data: &str) -> Result<QRCodeSvg, QrError> {
    Ok(QrCode::new(data.as_bytes())?
        .render::<DummyPixel>()
        .quiet_zone(false)
        .build())
}

#[component]
pub fn QRCode(data: CCStr) -> Element {
    let qr_code = match render_qr_svg(&data) {
        Ok(qr_code) => qr_code,
        Err(e) => {
            log::error!("QRCode - cannot encode {data}: {e}");
            return rsx! {
                p { class: "text-sm text-error", "QR code tidak tersedia" }
            };
        }
    };

    let width = qr_code.width;

    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 {width} {width}",
            path { fill: "currentcolor", d: qr_code.path.as_str() }
        }
    }
}
