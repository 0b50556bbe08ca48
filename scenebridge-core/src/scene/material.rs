//! Surface appearance attached to geometry and lines.

/// Linear RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Decodes a `0xRRGGBB` integer; alpha is always opaque.
    pub fn from_rgb(rgb: u32) -> Self {
        Self::new(
            ((rgb >> 16) & 0xFF) as f32 / 255.0,
            ((rgb >> 8) & 0xFF) as f32 / 255.0,
            (rgb & 0xFF) as f32 / 255.0,
            1.0,
        )
    }

    /// Decodes a `0xAARRGGBB` integer.
    pub fn from_argb(argb: u32) -> Self {
        let mut color = Self::from_rgb(argb);
        color.a = ((argb >> 24) & 0xFF) as f32 / 255.0;
        color
    }

    /// Uniformly random opaque color.
    pub fn random() -> Self {
        Self::new(rand::random(), rand::random(), rand::random(), 1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MaterialContents {
    Color(Color),
    /// Image resource name or path, resolved by the renderer.
    Image(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProperty {
    pub contents: Option<MaterialContents>,
    pub intensity: f32,
}

impl MaterialProperty {
    pub fn color(color: Color) -> Self {
        Self {
            contents: Some(MaterialContents::Color(color)),
            intensity: 1.0,
        }
    }
}

impl Default for MaterialProperty {
    fn default() -> Self {
        Self {
            contents: None,
            intensity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingModel {
    Phong,
    #[default]
    Blinn,
    Lambert,
    Constant,
    PhysicallyBased,
}

impl LightingModel {
    /// Unknown codes fall back to Blinn.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Phong,
            2 => Self::Lambert,
            3 => Self::Constant,
            4 => Self::PhysicallyBased,
            _ => Self::Blinn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    #[default]
    Fill,
    Lines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub diffuse: MaterialProperty,
    pub specular: MaterialProperty,
    pub emission: MaterialProperty,
    pub normal: MaterialProperty,
    pub metalness: MaterialProperty,
    pub roughness: MaterialProperty,
    pub shininess: f32,
    pub transparency: f32,
    pub lighting_model: LightingModel,
    pub fill_mode: FillMode,
    pub is_double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: MaterialProperty::color(Color::WHITE),
            specular: MaterialProperty::color(Color::BLACK),
            emission: MaterialProperty::color(Color::BLACK),
            normal: MaterialProperty::default(),
            metalness: MaterialProperty::default(),
            roughness: MaterialProperty::default(),
            shininess: 1.0,
            transparency: 1.0,
            lighting_model: LightingModel::default(),
            fill_mode: FillMode::default(),
            is_double_sided: false,
        }
    }
}

impl Material {
    /// Double-sided material with a random opaque diffuse color.
    pub fn random_line_material() -> Self {
        Self {
            diffuse: MaterialProperty::color(Color::random()),
            is_double_sided: true,
            ..Default::default()
        }
    }

    pub fn diffuse_color(&self) -> Option<Color> {
        match self.diffuse.contents {
            Some(MaterialContents::Color(color)) => Some(color),
            _ => None,
        }
    }
}
