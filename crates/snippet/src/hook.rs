//! Hook points a snippet can be attached to within a generated pipeline.
//!
//! Hook values are grouped in blocks of [`HOOK_TIER_SPAN`]: per-pipeline vertex
//! hooks, per-pipeline fragment hooks, per-layer vertex hooks and per-layer
//! fragment hooks. The numeric values are stable and shared with anything that
//! stores hooks by number.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SnippetError;

/// Width of the numeric range reserved for each [`HookTier`].
pub const HOOK_TIER_SPAN: u32 = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u32)]
pub enum SnippetHook {
    /// Entire vertex processing stage of the pipeline.
    Vertex = 0,
    /// Entire fragment processing stage of the pipeline.
    Fragment = 2048,
    /// Application of the layer matrix to a layer's texture coordinate.
    TextureCoordTransform = 4096,
    /// Fragment processing of a single layer.
    LayerFragment = 6144,
    /// Texture lookup of a single layer.
    TextureLookup = 6145,
}

/// Range a hook value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookTier {
    PipelineVertex,
    PipelineFragment,
    LayerVertex,
    LayerFragment,
}

/// Shader stage a hook's code is emitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// A variable made available to snippet code at a given hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookBuiltin {
    pub name: &'static str,
    pub glsl_type: &'static str,
    pub description: &'static str,
}

const VERTEX_BUILTINS: &[HookBuiltin] = &[
    HookBuiltin {
        name: "cogl_position_out",
        glsl_type: "vec4",
        description: "clip-space position written by the vertex stage",
    },
    HookBuiltin {
        name: "cogl_color_out",
        glsl_type: "vec4",
        description: "vertex color passed on to the fragment stage",
    },
];

const FRAGMENT_BUILTINS: &[HookBuiltin] = &[HookBuiltin {
    name: "cogl_color_out",
    glsl_type: "vec4",
    description: "fragment color produced by the rest of the pipeline",
}];

const TEXTURE_COORD_TRANSFORM_BUILTINS: &[HookBuiltin] = &[
    HookBuiltin {
        name: "cogl_matrix",
        glsl_type: "mat4",
        description: "user matrix for this layer",
    },
    HookBuiltin {
        name: "cogl_tex_coord",
        glsl_type: "vec4",
        description: "incoming and outgoing texture coordinate",
    },
];

const LAYER_FRAGMENT_BUILTINS: &[HookBuiltin] = &[HookBuiltin {
    name: "cogl_layer",
    glsl_type: "vec4",
    description: "resulting color for the layer",
}];

const TEXTURE_LOOKUP_BUILTINS: &[HookBuiltin] = &[
    HookBuiltin {
        name: "cogl_tex_coord",
        glsl_type: "vec4",
        description: "coordinates used for the texture lookup",
    },
    HookBuiltin {
        name: "cogl_texel",
        glsl_type: "vec4",
        description: "result of the texture lookup",
    },
];

impl SnippetHook {
    /// Every hook, in ascending numeric order.
    pub const ALL: [SnippetHook; 5] = [
        Self::Vertex,
        Self::Fragment,
        Self::TextureCoordTransform,
        Self::LayerFragment,
        Self::TextureLookup,
    ];

    pub fn as_raw(self) -> u32 {
        self as u32
    }

    pub fn from_raw(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|hook| hook.as_raw() == value)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
            Self::TextureCoordTransform => "texture-coord-transform",
            Self::LayerFragment => "layer-fragment",
            Self::TextureLookup => "texture-lookup",
        }
    }

    /// Classifies the hook by the numeric block its value lives in.
    pub fn tier(self) -> HookTier {
        match self.as_raw() / HOOK_TIER_SPAN {
            0 => HookTier::PipelineVertex,
            1 => HookTier::PipelineFragment,
            2 => HookTier::LayerVertex,
            _ => HookTier::LayerFragment,
        }
    }

    pub fn is_per_layer(self) -> bool {
        matches!(self.tier(), HookTier::LayerVertex | HookTier::LayerFragment)
    }

    pub fn stage(self) -> ShaderStage {
        match self.tier() {
            HookTier::PipelineVertex | HookTier::LayerVertex => ShaderStage::Vertex,
            HookTier::PipelineFragment | HookTier::LayerFragment => ShaderStage::Fragment,
        }
    }

    /// Variables the generated shader exposes to snippet code at this hook.
    pub fn builtins(self) -> &'static [HookBuiltin] {
        match self {
            Self::Vertex => VERTEX_BUILTINS,
            Self::Fragment => FRAGMENT_BUILTINS,
            Self::TextureCoordTransform => TEXTURE_COORD_TRANSFORM_BUILTINS,
            Self::LayerFragment => LAYER_FRAGMENT_BUILTINS,
            Self::TextureLookup => TEXTURE_LOOKUP_BUILTINS,
        }
    }
}

impl fmt::Display for SnippetHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SnippetHook {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hook| hook.name() == s)
            .ok_or_else(|| SnippetError::UnknownHook(s.to_string()))
    }
}

impl TryFrom<u32> for SnippetHook {
    type Error = SnippetError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(SnippetError::UnknownHookValue(value))
    }
}

impl fmt::Display for HookTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PipelineVertex => "pipeline-vertex",
            Self::PipelineFragment => "pipeline-fragment",
            Self::LayerVertex => "layer-vertex",
            Self::LayerFragment => "layer-fragment",
        };
        f.write_str(label)
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_are_stable() {
        assert_eq!(SnippetHook::Vertex.as_raw(), 0);
        assert_eq!(SnippetHook::Fragment.as_raw(), 2048);
        assert_eq!(SnippetHook::TextureCoordTransform.as_raw(), 4096);
        assert_eq!(SnippetHook::LayerFragment.as_raw(), 6144);
        assert_eq!(SnippetHook::TextureLookup.as_raw(), 6145);
    }

    #[test]
    fn from_raw_maps_back_and_rejects_gaps() {
        for hook in SnippetHook::ALL {
            assert_eq!(SnippetHook::from_raw(hook.as_raw()), Some(hook));
        }
        assert_eq!(SnippetHook::from_raw(1), None);
        assert!(matches!(
            SnippetHook::try_from(6146),
            Err(SnippetError::UnknownHookValue(6146))
        ));
    }

    #[test]
    fn tiers_follow_numeric_blocks() {
        assert_eq!(SnippetHook::Vertex.tier(), HookTier::PipelineVertex);
        assert_eq!(SnippetHook::Fragment.tier(), HookTier::PipelineFragment);
        assert_eq!(
            SnippetHook::TextureCoordTransform.tier(),
            HookTier::LayerVertex
        );
        assert_eq!(SnippetHook::LayerFragment.tier(), HookTier::LayerFragment);
        assert_eq!(SnippetHook::TextureLookup.tier(), HookTier::LayerFragment);

        assert!(!SnippetHook::Fragment.is_per_layer());
        assert!(SnippetHook::TextureLookup.is_per_layer());
        assert_eq!(SnippetHook::TextureCoordTransform.stage(), ShaderStage::Vertex);
        assert_eq!(SnippetHook::TextureLookup.stage(), ShaderStage::Fragment);
    }

    #[test]
    fn parses_names() {
        assert_eq!(
            "texture-coord-transform".parse::<SnippetHook>().unwrap(),
            SnippetHook::TextureCoordTransform
        );
        assert!("Fragment".parse::<SnippetHook>().is_err());
        assert!(" fragment".parse::<SnippetHook>().is_err());
        assert!(matches!(
            "geometry".parse::<SnippetHook>(),
            Err(SnippetError::UnknownHook(name)) if name == "geometry"
        ));
    }

    #[test]
    fn names_match_serde_names() {
        #[derive(serde::Deserialize)]
        struct Entry {
            hook: SnippetHook,
        }

        for hook in SnippetHook::ALL {
            let parsed: Entry = toml::from_str(&format!("hook = \"{}\"", hook.name())).unwrap();
            assert_eq!(parsed.hook, hook);
            assert_eq!(hook.name().parse::<SnippetHook>().unwrap(), hook);
        }
        assert!(toml::from_str::<Entry>("hook = \"Fragment\"").is_err());
        assert!("Fragment".parse::<SnippetHook>().is_err());
    }

    #[test]
    fn layer_fragment_exposes_cogl_layer() {
        let names: Vec<_> = SnippetHook::LayerFragment
            .builtins()
            .iter()
            .map(|builtin| builtin.name)
            .collect();
        assert_eq!(names, vec!["cogl_layer"]);
    }
}
