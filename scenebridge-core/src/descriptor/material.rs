use crate::scene::{
    Color, FillMode, LightingModel, Material, MaterialContents, MaterialProperty,
};
use serde::Deserialize;

/// One material slot (diffuse, emission, ...) as sent by the host.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPropertyDescriptor {
    /// Packed `0xAARRGGBB` color.
    pub color: Option<u32>,
    pub image: Option<String>,
    pub intensity: Option<f32>,
}

impl MaterialPropertyDescriptor {
    /// Applies present fields over `property`. An image wins over a color.
    fn apply(&self, property: &mut MaterialProperty) {
        if let Some(color) = self.color {
            property.contents = Some(MaterialContents::Color(Color::from_argb(color)));
        }
        if let Some(image) = &self.image {
            property.contents = Some(MaterialContents::Image(image.clone()));
        }
        if let Some(intensity) = self.intensity {
            property.intensity = intensity;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDescriptor {
    pub diffuse: Option<MaterialPropertyDescriptor>,
    pub specular: Option<MaterialPropertyDescriptor>,
    pub emission: Option<MaterialPropertyDescriptor>,
    pub normal: Option<MaterialPropertyDescriptor>,
    pub metalness: Option<MaterialPropertyDescriptor>,
    pub roughness: Option<MaterialPropertyDescriptor>,
    pub shininess: Option<f32>,
    pub transparency: Option<f32>,
    pub lighting_model_name: Option<u8>,
    pub fill_mode: Option<u8>,
    pub double_sided: Option<bool>,
}

impl MaterialDescriptor {
    pub fn to_material(&self) -> Material {
        let mut material = Material::default();
        let slots = [
            (&self.diffuse, &mut material.diffuse),
            (&self.specular, &mut material.specular),
            (&self.emission, &mut material.emission),
            (&self.normal, &mut material.normal),
            (&self.metalness, &mut material.metalness),
            (&self.roughness, &mut material.roughness),
        ];
        for (descriptor, property) in slots {
            if let Some(descriptor) = descriptor {
                descriptor.apply(property);
            }
        }
        if let Some(shininess) = self.shininess {
            material.shininess = shininess;
        }
        if let Some(transparency) = self.transparency {
            material.transparency = transparency;
        }
        if let Some(code) = self.lighting_model_name {
            material.lighting_model = LightingModel::from_code(code);
        }
        if let Some(fill_mode) = self.fill_mode {
            material.fill_mode = if fill_mode == 1 {
                FillMode::Lines
            } else {
                FillMode::Fill
            };
        }
        if let Some(double_sided) = self.double_sided {
            material.is_double_sided = double_sided;
        }
        material
    }
}

pub fn parse_materials(descriptors: &[MaterialDescriptor]) -> Vec<Material> {
    descriptors.iter().map(MaterialDescriptor::to_material).collect()
}
