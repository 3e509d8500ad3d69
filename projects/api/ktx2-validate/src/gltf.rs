//! KHR_texture_basisu (glTF) compatibility, checked when requested with
//! `--gltf-basisu`: the payload must be BasisLZ/ETC1S or UASTC, 2D,
//! non-array, non-cube, with dimensions that are multiples of 4 and a mip
//! pyramid that is either absent or complete.

use ktx2_format::dfd::{color_model_name, ColorModel};

use crate::context::ValidationContext;
use crate::issues::Transcode;
use crate::reports::ValidationReport;

impl<F: FnMut(&ValidationReport)> ValidationContext<'_, F> {
    pub(crate) fn validate_gltf_basisu(&mut self) {
        let header = self.header;

        let model = self.dfd.as_ref().map(|dfd| dfd.color_model);
        let is_basis_payload = matches!(
            model,
            Some(model)
                if model == ColorModel::Etc1s as u32 || model == ColorModel::Uastc as u32
        );
        if !is_basis_payload {
            let rendered = match model {
                Some(model) => match color_model_name(model) {
                    Some(name) => name.to_string(),
                    None => model.to_string(),
                },
                None => "not present".to_string(),
            };
            self.error(&Transcode::NOT_BASIS_COMPATIBLE_MODEL, &[&rendered]);
        }

        if header.pixel_width % 4 != 0 || header.pixel_height % 4 != 0 {
            self.error(
                &Transcode::DIMENSIONS_NOT_MULTIPLE_OF_FOUR,
                &[&header.pixel_width, &header.pixel_height],
            );
        }
        if header.pixel_height == 0 || header.pixel_depth != 0 {
            self.error(
                &Transcode::NOT_TWO_DIMENSIONAL,
                &[&header.pixel_height, &header.pixel_depth],
            );
        }
        if header.face_count != 1 {
            self.error(&Transcode::CUBEMAP_NOT_ALLOWED, &[&header.face_count]);
        }
        if header.layer_count != 0 {
            self.error(&Transcode::LAYERED_NOT_ALLOWED, &[&header.layer_count]);
        }

        let max_dim = header.pixel_width.max(header.pixel_height);
        let full_pyramid = 32 - max_dim.max(1).leading_zeros();
        if self.level_count != 1 && self.level_count != full_pyramid {
            let level_count = self.level_count;
            self.error(
                &Transcode::INCOMPLETE_MIP_PYRAMID,
                &[&level_count, &full_pyramid],
            );
        }
    }
}
