use base64::{engine::general_purpose, Engine as _};

const DEFAULT_SIZE: u32 = 1000;

/// Aspect ratio presets offered by the fill transformation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Portrait,
    Phone,
}

impl AspectRatio {
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim() {
            "1:1" => Some(AspectRatio::Square),
            "3:4" => Some(AspectRatio::Portrait),
            "9:16" => Some(AspectRatio::Phone),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "Square (1:1)",
            AspectRatio::Portrait => "Standard Portrait (3:4)",
            AspectRatio::Phone => "Phone Portrait (9:16)",
        }
    }

    pub fn width(self) -> u32 {
        1000
    }

    pub fn height(self) -> u32 {
        match self {
            AspectRatio::Square => 1000,
            AspectRatio::Portrait => 1334,
            AspectRatio::Phone => 1778,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "width" => Some(Dimension::Width),
            "height" => Some(Dimension::Height),
            _ => None,
        }
    }
}

/// Size information known about an image
#[derive(Clone, Debug, Default)]
pub struct ImageDimensions {
    pub aspect_ratio: Option<AspectRatio>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Resolve the rendered size of an image along one dimension.
///
/// `fill` transformations use the aspect ratio preset; everything else uses
/// the image's own size. Missing or zero sizes fall back to 1000.
pub fn image_size(transformation: &str, image: &ImageDimensions, dimension: Dimension) -> u32 {
    let size = if transformation == "fill" {
        image.aspect_ratio.map(|ratio| match dimension {
            Dimension::Width => ratio.width(),
            Dimension::Height => ratio.height(),
        })
    } else {
        match dimension {
            Dimension::Width => image.width,
            Dimension::Height => image.height,
        }
    };
    size.filter(|s| *s > 0).unwrap_or(DEFAULT_SIZE)
}

/// Animated SVG shown while an image is transforming
pub fn shimmer_svg(w: u32, h: u32) -> String {
    format!(
        r##"
<svg width="{w}" height="{h}" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
  <defs>
    <linearGradient id="g">
      <stop stop-color="#7986AC" offset="20%" />
      <stop stop-color="#68769e" offset="50%" />
      <stop stop-color="#7986AC" offset="70%" />
    </linearGradient>
  </defs>
  <rect width="{w}" height="{h}" fill="#7986AC" />
  <rect id="r" width="{w}" height="{h}" fill="url(#g)" />
  <animate xlink:href="#r" attributeName="x" from="-{w}" to="{w}" dur="1s" repeatCount="indefinite"  />
</svg>"##
    )
}

pub fn placeholder_data_url() -> String {
    let encoded = general_purpose::STANDARD.encode(shimmer_svg(DEFAULT_SIZE, DEFAULT_SIZE));
    format!("data:image/svg+xml;base64,{}", encoded)
}

/// File name used when downloading a transformed image
pub fn download_file_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    Some(format!("{}.png", name.replacen(' ', "_", 1)))
}
