//! # EXIF 透传模块
//!
//! ## 设计思路
//!
//! JPEG 编码器只负责像素，EXIF 以 APP1 段的形式追加到已编码字节中：
//! `FF E1 | 长度(大端, 含自身 2 字节) | "Exif\0\0" | EXIF 原始字节`。
//!
//! ## 实现思路
//!
//! - APP1 放在 SOI 之后；若紧跟着 JFIF APP0 段，则放在 APP0 之后。
//! - 源数据若已带 `Exif\0\0` 前缀则不重复添加，其余字节原样写入。
//! - 段长度上限为 65535，超出时返回编码错误而不是截断。

use super::ConvertError;

const MARKER_PREFIX: u8 = 0xFF;
const SOI: u8 = 0xD8;
const APP0: u8 = 0xE0;
const APP1: u8 = 0xE1;
const EXIF_HEADER: &[u8; 6] = b"Exif\0\0";
const MAX_SEGMENT_LEN: usize = u16::MAX as usize;

/// 将 EXIF 写入 JPEG 字节流，返回新的字节流。
pub(crate) fn embed_exif(jpeg: Vec<u8>, exif: &[u8]) -> Result<Vec<u8>, ConvertError> {
    if jpeg.len() < 2 || jpeg[0] != MARKER_PREFIX || jpeg[1] != SOI {
        return Err(ConvertError::Encode("JPEG 输出缺少 SOI 标记".to_string()));
    }

    let segment = build_app1_segment(exif)?;
    let insert_at = insertion_offset(&jpeg);

    let mut out = Vec::with_capacity(jpeg.len() + segment.len());
    out.extend_from_slice(&jpeg[..insert_at]);
    out.extend_from_slice(&segment);
    out.extend_from_slice(&jpeg[insert_at..]);
    Ok(out)
}

fn build_app1_segment(exif: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let needs_header = !exif.starts_with(EXIF_HEADER);
    let payload_len = exif.len() + if needs_header { EXIF_HEADER.len() } else { 0 };
    let segment_len = payload_len + 2;

    if segment_len > MAX_SEGMENT_LEN {
        return Err(ConvertError::Encode(format!(
            "EXIF 数据过大：{} 字节（APP1 段上限 {} 字节）",
            exif.len(),
            MAX_SEGMENT_LEN - 2
        )));
    }

    let mut segment = Vec::with_capacity(segment_len + 2);
    segment.push(MARKER_PREFIX);
    segment.push(APP1);
    segment.extend_from_slice(&(segment_len as u16).to_be_bytes());
    if needs_header {
        segment.extend_from_slice(EXIF_HEADER);
    }
    segment.extend_from_slice(exif);
    Ok(segment)
}

/// SOI 之后；若存在 APP0，则跳过整个 APP0 段。
fn insertion_offset(jpeg: &[u8]) -> usize {
    let after_soi = 2;
    if jpeg.len() >= after_soi + 4 && jpeg[after_soi] == MARKER_PREFIX && jpeg[after_soi + 1] == APP0
    {
        let len = u16::from_be_bytes([jpeg[after_soi + 2], jpeg[after_soi + 3]]) as usize;
        let end = after_soi + 2 + len;
        if end <= jpeg.len() {
            return end;
        }
    }
    after_soi
}
