//! Schemas for the node types that commonly appear in image-generation workflows.

use super::catalogue::SchemaCatalogue;
use super::definition::{InputMode, NodePort, NodeSchema, PortMap};
use crate::field::FieldType;

fn port(
    name: &str,
    title: &str,
    description: &str,
    field_type: FieldType,
    input: InputMode,
    required: bool,
) -> (String, NodePort) {
    (
        name.to_string(),
        NodePort {
            name: name.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            field_type,
            input,
            required,
        },
    )
}

/// Declares the built-in schemas as a table and generates `builtin_schemas()`.
///
/// Ports are written as `(name, title, description, cardinality(TypeName), mode, required)`
/// where `cardinality` is `single` or `collection` and `mode` is an `InputMode` variant.
macro_rules! define_node_schemas {
    ( $(
        $node_type:literal => {
            title: $title:literal,
            description: $description:literal,
            version: $version:literal,
            category: $category:literal,
            inputs: [ $( ($in_name:literal, $in_title:literal, $in_desc:literal, $in_card:ident($in_ty:literal), $in_mode:ident, $in_req:literal) ),* $(,)? ],
            outputs: [ $( ($out_name:literal, $out_title:literal, $out_desc:literal, $out_card:ident($out_ty:literal), $out_mode:ident, $out_req:literal) ),* $(,)? ] $(,)?
        }
    ),* $(,)? ) => {
        fn builtin_schemas() -> Vec<NodeSchema> {
            vec![ $(
                NodeSchema {
                    node_type: $node_type.to_string(),
                    title: $title.to_string(),
                    description: $description.to_string(),
                    version: $version.to_string(),
                    category: $category.to_string(),
                    inputs: PortMap::from_iter([ $(
                        port($in_name, $in_title, $in_desc, FieldType::$in_card($in_ty), InputMode::$in_mode, $in_req)
                    ),* ]),
                    outputs: PortMap::from_iter([ $(
                        port($out_name, $out_title, $out_desc, FieldType::$out_card($out_ty), InputMode::$out_mode, $out_req)
                    ),* ]),
                }
            ),* ]
        }
    };
}

define_node_schemas! {
    "integer" => {
        title: "Integer", description: "An integer primitive", version: "1.0.0", category: "primitives",
        inputs: [("value", "Value", "The integer value", single("IntegerField"), Any, true)],
        outputs: [("value", "Value", "The integer value", single("IntegerField"), Connection, true)],
    },
    "float" => {
        title: "Float", description: "A float primitive", version: "1.0.0", category: "primitives",
        inputs: [("value", "Value", "The float value", single("FloatField"), Any, true)],
        outputs: [("value", "Value", "The float value", single("FloatField"), Connection, true)],
    },
    "string" => {
        title: "String", description: "A string primitive", version: "1.0.0", category: "primitives",
        inputs: [("value", "Value", "The string value", single("StringField"), Any, true)],
        outputs: [("value", "Value", "The string value", single("StringField"), Connection, true)],
    },
    "compel" => {
        title: "Compel Prompt", description: "Parse and encode prompt text using CLIP", version: "1.2.0", category: "conditioning",
        inputs: [
            ("prompt", "Prompt", "The prompt to encode", single("StringField"), Any, true),
            ("clip", "CLIP", "CLIP model", single("CLIPField"), Connection, true),
        ],
        outputs: [("conditioning", "Conditioning", "Conditioning tensor", single("ConditioningField"), Connection, true)],
    },
    "main_model_loader" => {
        title: "Main Model Loader", description: "Load a main model", version: "1.0.0", category: "model_loaders",
        inputs: [("model", "Model", "The model to load", single("ModelIdentifierField"), Direct, true)],
        outputs: [
            ("unet", "UNet", "UNet model", single("UNetField"), Connection, true),
            ("clip", "CLIP", "CLIP model", single("CLIPField"), Connection, true),
            ("vae", "VAE", "VAE model", single("VAEField"), Connection, true),
        ],
    },
    "noise" => {
        title: "Noise", description: "Generate noise tensor", version: "1.0.0", category: "latents",
        inputs: [
            ("seed", "Seed", "Random seed", single("IntegerField"), Any, true),
            ("width", "Width", "Width", single("IntegerField"), Any, true),
            ("height", "Height", "Height", single("IntegerField"), Any, true),
        ],
        outputs: [("noise", "Noise", "Noise tensor", single("LatentsField"), Connection, true)],
    },
    "denoise_latents" => {
        title: "Denoise Latents", description: "Denoise latents using a diffusion model", version: "1.5.0", category: "latents",
        inputs: [
            ("positive_conditioning", "Positive Conditioning", "Positive conditioning tensor", single("ConditioningField"), Connection, true),
            ("negative_conditioning", "Negative Conditioning", "Negative conditioning tensor", single("ConditioningField"), Connection, true),
            ("noise", "Noise", "Noise tensor", single("LatentsField"), Connection, false),
            ("unet", "UNet", "UNet model", single("UNetField"), Connection, true),
            ("steps", "Steps", "Number of denoising steps", single("IntegerField"), Any, true),
            ("cfg_scale", "CFG Scale", "Classifier-free guidance scale", single("FloatField"), Any, true),
            ("scheduler", "Scheduler", "Sampling scheduler", single("SchedulerField"), Direct, true),
            ("denoising_start", "Denoising Start", "Start denoising at this step", single("FloatField"), Any, false),
            ("denoising_end", "Denoising End", "End denoising at this step", single("FloatField"), Any, false),
        ],
        outputs: [("latents", "Latents", "Denoised latents", single("LatentsField"), Connection, true)],
    },
    "l2i" => {
        title: "Latents to Image", description: "Decode latents to image using VAE", version: "1.3.0", category: "latents",
        inputs: [
            ("latents", "Latents", "Latents to decode", single("LatentsField"), Connection, true),
            ("vae", "VAE", "VAE model", single("VAEField"), Connection, true),
        ],
        outputs: [("image", "Image", "Decoded image", single("ImageField"), Connection, true)],
    },
    "i2l" => {
        title: "Image to Latents", description: "Encode image to latents using VAE", version: "1.0.0", category: "latents",
        inputs: [
            ("image", "Image", "Image to encode", single("ImageField"), Connection, true),
            ("vae", "VAE", "VAE model", single("VAEField"), Connection, true),
        ],
        outputs: [("latents", "Latents", "Encoded latents", single("LatentsField"), Connection, true)],
    },
    "save_image" => {
        title: "Save Image", description: "Save an image to the gallery", version: "1.0.0", category: "image",
        inputs: [
            ("image", "Image", "Image to save", single("ImageField"), Connection, true),
            ("board", "Board", "Board to save to", single("BoardField"), Direct, false),
        ],
        outputs: [("image", "Image", "Saved image", single("ImageField"), Connection, true)],
    },
    "sdxl_model_loader" => {
        title: "SDXL Model Loader", description: "Load an SDXL main model", version: "1.0.4", category: "model_loaders",
        inputs: [("model", "Model", "The SDXL model to load", single("MainModelField"), Direct, true)],
        outputs: [
            ("unet", "UNet", "UNet model", single("UNetField"), Connection, true),
            ("clip", "CLIP", "CLIP text encoder (first)", single("CLIPField"), Connection, true),
            ("clip2", "CLIP 2", "CLIP text encoder (second)", single("CLIPField"), Connection, true),
            ("vae", "VAE", "VAE model", single("VAEField"), Connection, true),
        ],
    },
    "sdxl_compel_prompt" => {
        title: "SDXL Compel Prompt", description: "Parse and encode prompt for SDXL", version: "1.2.1", category: "conditioning",
        inputs: [
            ("prompt", "Prompt", "The prompt to encode", single("StringField"), Any, true),
            ("style", "Style", "Style prompt", single("StringField"), Any, false),
            ("clip", "CLIP", "CLIP text encoder (first)", single("CLIPField"), Connection, true),
            ("clip2", "CLIP 2", "CLIP text encoder (second)", single("CLIPField"), Connection, true),
        ],
        outputs: [("conditioning", "Conditioning", "Conditioning tensor", single("ConditioningField"), Connection, true)],
    },
    "vae_loader" => {
        title: "VAE Loader", description: "Load a VAE model", version: "1.0.4", category: "model_loaders",
        inputs: [("vae_model", "VAE Model", "The VAE model to load", single("VAEModelField"), Direct, true)],
        outputs: [("vae", "VAE", "VAE model", single("VAEField"), Connection, true)],
    },
    "rand_int" => {
        title: "Random Integer", description: "Generate a random integer", version: "1.0.1", category: "primitives",
        inputs: [
            ("low", "Low", "Minimum value", single("IntegerField"), Any, true),
            ("high", "High", "Maximum value", single("IntegerField"), Any, true),
        ],
        outputs: [("value", "Value", "Random integer", single("IntegerField"), Connection, true)],
    },
    "string_join" => {
        title: "String Join", description: "Join two strings", version: "1.0.1", category: "primitives",
        inputs: [
            ("string_left", "String Left", "Left string", single("StringField"), Any, true),
            ("string_right", "String Right", "Right string", single("StringField"), Any, true),
        ],
        outputs: [("value", "Value", "Joined string", single("StringField"), Connection, true)],
    },
    "flux_model_loader" => {
        title: "Flux Model Loader", description: "Load a FLUX model", version: "1.0.6", category: "model_loaders",
        inputs: [
            ("model", "Model", "FLUX main model", single("MainModelField"), Direct, true),
            ("t5_encoder_model", "T5 Encoder", "T5 encoder model", single("T5EncoderModelField"), Direct, true),
            ("clip_embed_model", "CLIP Embed", "CLIP embed model", single("CLIPEmbedModelField"), Direct, true),
            ("vae_model", "VAE Model", "VAE model", single("VAEModelField"), Direct, true),
        ],
        outputs: [
            ("transformer", "Transformer", "FLUX transformer", single("FluxTransformerField"), Connection, true),
            ("clip", "CLIP", "CLIP encoder", single("CLIPField"), Connection, true),
            ("t5_encoder", "T5 Encoder", "T5 text encoder", single("T5EncoderField"), Connection, true),
            ("vae", "VAE", "VAE model", single("VAEField"), Connection, true),
            ("max_seq_len", "Max Seq Len", "Maximum sequence length", single("IntegerField"), Connection, true),
        ],
    },
    "flux_text_encoder" => {
        title: "Flux Text Encoder", description: "Encode text for FLUX", version: "1.1.2", category: "conditioning",
        inputs: [
            ("clip", "CLIP", "CLIP encoder", single("CLIPField"), Connection, true),
            ("t5_encoder", "T5 Encoder", "T5 encoder", single("T5EncoderField"), Connection, true),
            ("t5_max_seq_len", "T5 Max Seq Len", "Maximum T5 sequence length", single("IntegerField"), Any, false),
            ("prompt", "Prompt", "Text prompt", single("StringField"), Any, true),
        ],
        outputs: [("conditioning", "Conditioning", "FLUX conditioning", single("FluxConditioningField"), Connection, true)],
    },
    "flux_denoise" => {
        title: "Flux Denoise", description: "Denoise latents using FLUX", version: "4.0.0", category: "latents",
        inputs: [
            ("latents", "Latents", "Input latents", single("LatentsField"), Connection, false),
            ("transformer", "Transformer", "FLUX transformer", single("FluxTransformerField"), Connection, true),
            ("positive_text_conditioning", "Positive Conditioning", "Positive text conditioning", single("FluxConditioningField"), Connection, true),
            ("width", "Width", "Output width", single("IntegerField"), Any, true),
            ("height", "Height", "Output height", single("IntegerField"), Any, true),
            ("num_steps", "Steps", "Number of steps", single("IntegerField"), Any, true),
            ("guidance", "Guidance", "Guidance scale", single("FloatField"), Any, true),
            ("seed", "Seed", "Random seed", single("IntegerField"), Any, true),
            ("kontext_conditioning", "Kontext Conditioning", "Kontext conditioning", single("FluxKontextCondField"), Connection, false),
            ("redux_conditioning", "Redux Conditioning", "Redux conditioning", collection("FluxReduxCondField"), Connection, false),
            ("controlnet_vae", "ControlNet VAE", "VAE for ControlNet", single("VAEField"), Connection, false),
        ],
        outputs: [("latents", "Latents", "Denoised latents", single("LatentsField"), Connection, true)],
    },
    "flux_vae_encode" => {
        title: "Flux VAE Encode", description: "Encode image to latents using FLUX VAE", version: "1.0.1", category: "latents",
        inputs: [
            ("image", "Image", "Image to encode", single("ImageField"), Connection, true),
            ("vae", "VAE", "VAE model", single("VAEField"), Connection, true),
        ],
        outputs: [
            ("latents", "Latents", "Encoded latents", single("LatentsField"), Connection, true),
            ("width", "Width", "Image width", single("IntegerField"), Connection, true),
            ("height", "Height", "Image height", single("IntegerField"), Connection, true),
        ],
    },
    "flux_vae_decode" => {
        title: "Flux VAE Decode", description: "Decode latents to image using FLUX VAE", version: "1.0.2", category: "latents",
        inputs: [
            ("latents", "Latents", "Latents to decode", single("LatentsField"), Connection, true),
            ("vae", "VAE", "VAE model", single("VAEField"), Connection, true),
        ],
        outputs: [("image", "Image", "Decoded image", single("ImageField"), Connection, true)],
    },
    "flux_kontext" => {
        title: "Flux Kontext", description: "FLUX Kontext image conditioning", version: "1.0.0", category: "conditioning",
        inputs: [("image", "Image", "Reference image", single("ImageField"), Connection, true)],
        outputs: [("kontext_cond", "Kontext Conditioning", "Kontext conditioning output", single("FluxKontextCondField"), Connection, true)],
    },
    "flux_redux" => {
        title: "Flux Redux", description: "FLUX Redux reference image", version: "2.0.0", category: "conditioning",
        inputs: [
            ("image", "Image", "Reference image", single("ImageField"), Connection, true),
            ("redux_model", "Redux Model", "FLUX Redux model", single("FluxReduxModelField"), Direct, true),
        ],
        outputs: [("redux_cond", "Redux Conditioning", "Redux conditioning output", single("FluxReduxCondField"), Connection, true)],
    },
    "image_batch" => {
        title: "Image Batch", description: "Create a batch of images", version: "1.0.0", category: "image",
        inputs: [("images", "Images", "Images for batch", collection("ImageField"), Direct, true)],
        outputs: [("image", "Image", "Batch image output", single("ImageField"), Connection, true)],
    },
    "collect" => {
        title: "Collect", description: "Collect items into a collection", version: "1.0.0", category: "util",
        inputs: [("item", "Item", "Item to collect", single("AnyField"), Connection, true)],
        outputs: [("collection", "Collection", "Collected items", collection("AnyField"), Connection, true)],
    },
    "image" => {
        title: "Image", description: "Image passthrough node", version: "1.0.2", category: "image",
        inputs: [("image", "Image", "Input image", single("ImageField"), Connection, true)],
        outputs: [
            ("image", "Image", "Output image", single("ImageField"), Connection, true),
            ("width", "Width", "Image width", single("IntegerField"), Connection, true),
            ("height", "Height", "Image height", single("IntegerField"), Connection, true),
        ],
    },
    "img_resize" => {
        title: "Resize Image", description: "Resize an image", version: "1.2.2", category: "image",
        inputs: [
            ("image", "Image", "Image to resize", single("ImageField"), Connection, true),
            ("width", "Width", "Target width", single("IntegerField"), Any, true),
            ("height", "Height", "Target height", single("IntegerField"), Any, true),
        ],
        outputs: [
            ("image", "Image", "Resized image", single("ImageField"), Connection, true),
            ("width", "Width", "Output width", single("IntegerField"), Connection, true),
            ("height", "Height", "Output height", single("IntegerField"), Connection, true),
        ],
    },
    "float_to_int" => {
        title: "Float To Integer", description: "Convert float to integer", version: "1.0.1", category: "primitives",
        inputs: [
            ("value", "Value", "Float value", single("FloatField"), Any, true),
            ("multiple", "Multiple of", "Round to multiple of", single("IntegerField"), Any, false),
        ],
        outputs: [("value", "Value", "Integer value", single("IntegerField"), Connection, true)],
    },
    "float_math" => {
        title: "Float Math", description: "Perform math on floats", version: "1.0.1", category: "primitives",
        inputs: [
            ("a", "A", "First operand", single("FloatField"), Any, true),
            ("b", "B", "Second operand", single("FloatField"), Any, true),
            ("operation", "Operation", "Math operation", single("StringField"), Direct, true),
        ],
        outputs: [("value", "Value", "Result", single("FloatField"), Connection, true)],
    },
    "metadata_from_image" => {
        title: "Metadata From Image", description: "Extract metadata from image", version: "1.0.1", category: "metadata",
        inputs: [("image", "Image", "Source image", single("ImageField"), Connection, true)],
        outputs: [("metadata", "Metadata", "Image metadata", single("MetadataField"), Connection, true)],
    },
    "metadata_to_string" => {
        title: "Metadata To String", description: "Extract string from metadata", version: "1.0.0", category: "metadata",
        inputs: [
            ("metadata", "Metadata", "Metadata input", single("MetadataField"), Connection, true),
            ("label", "Label", "Field to extract", single("StringField"), Direct, true),
        ],
        outputs: [("value", "Value", "Extracted string", single("StringField"), Connection, true)],
    },
    "core_metadata" => {
        title: "Core Metadata", description: "Create core metadata", version: "2.0.0", category: "metadata",
        inputs: [
            ("seed", "Seed", "Seed value", single("IntegerField"), Any, false),
            ("positive_prompt", "Positive Prompt", "Positive prompt", single("StringField"), Any, false),
            ("width", "Width", "Image width", single("IntegerField"), Any, false),
            ("height", "Height", "Image height", single("IntegerField"), Any, false),
        ],
        outputs: [("metadata", "Metadata", "Core metadata", single("MetadataField"), Connection, true)],
    },
}

impl SchemaCatalogue {
    /// The catalogue of built-in node types.
    pub fn builtin() -> Self {
        builtin_schemas()
            .into_iter()
            .fold(SchemaCatalogue::new(), SchemaCatalogue::with_schema)
    }
}
