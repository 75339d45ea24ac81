//! Audio channel layout classification.
//!
//! Layouts follow the CoreAudio numeric conventions used by QuickTime containers:
//! a layout tag is `(index << 16) | channel_count`, with two escape tags that defer to
//! per-channel label codes or to a speaker bitmap.

use std::fmt;

use crate::foundation::error::{MovtrackError, MovtrackResult};

/// Numeric channel layout tags.
pub mod layout_tag {
    /// Per-channel labels are carried in [`super::ChannelLayout::descriptions`].
    pub const USE_CHANNEL_DESCRIPTIONS: u32 = 0;
    /// Speakers are carried in [`super::ChannelLayout::bitmap`].
    pub const USE_CHANNEL_BITMAP: u32 = 1 << 16;

    /// Single mono channel.
    pub const MONO: u32 = (100 << 16) | 1;
    /// Left, right.
    pub const STEREO: u32 = (101 << 16) | 2;
    /// Headphone left, right.
    pub const STEREO_HEADPHONES: u32 = (102 << 16) | 2;
    /// Matrix-encoded left total, right total.
    pub const MATRIX_STEREO: u32 = (103 << 16) | 2;
    /// Mid/side pair.
    pub const MID_SIDE: u32 = (104 << 16) | 2;
    /// Coincident XY pair.
    pub const XY: u32 = (105 << 16) | 2;
    /// Binaural left, right.
    pub const BINAURAL: u32 = (106 << 16) | 2;
    /// First-order ambisonic W, X, Y, Z.
    pub const AMBISONIC_B_FORMAT: u32 = (107 << 16) | 4;
    /// L R Ls Rs.
    pub const QUADRAPHONIC: u32 = (108 << 16) | 4;
    /// L R Ls Rs C.
    pub const PENTAGONAL: u32 = (109 << 16) | 5;
    /// L R Ls Rs C Cs.
    pub const HEXAGONAL: u32 = (110 << 16) | 6;
    /// L R Ls Rs C Cs Lw Rw.
    pub const OCTAGONAL: u32 = (111 << 16) | 8;
    /// L R Ls Rs Vhl Vhr Tbl Tbr.
    pub const CUBE: u32 = (112 << 16) | 8;
    /// L R C.
    pub const MPEG_3_0_A: u32 = (113 << 16) | 3;
    /// C L R.
    pub const MPEG_3_0_B: u32 = (114 << 16) | 3;
    /// L R C Cs.
    pub const MPEG_4_0_A: u32 = (115 << 16) | 4;
    /// C L R Cs.
    pub const MPEG_4_0_B: u32 = (116 << 16) | 4;
    /// L R C Ls Rs.
    pub const MPEG_5_0_A: u32 = (117 << 16) | 5;
    /// L R Ls Rs C.
    pub const MPEG_5_0_B: u32 = (118 << 16) | 5;
    /// L C R Ls Rs.
    pub const MPEG_5_0_C: u32 = (119 << 16) | 5;
    /// C L R Ls Rs.
    pub const MPEG_5_0_D: u32 = (120 << 16) | 5;
    /// L R C LFE Ls Rs.
    pub const MPEG_5_1_A: u32 = (121 << 16) | 6;
    /// L R Ls Rs C LFE.
    pub const MPEG_5_1_B: u32 = (122 << 16) | 6;
    /// L C R Ls Rs LFE.
    pub const MPEG_5_1_C: u32 = (123 << 16) | 6;
    /// C L R Ls Rs LFE.
    pub const MPEG_5_1_D: u32 = (124 << 16) | 6;
    /// L R C LFE Ls Rs Cs.
    pub const MPEG_6_1_A: u32 = (125 << 16) | 7;
    /// L R C LFE Ls Rs Lc Rc.
    pub const MPEG_7_1_A: u32 = (126 << 16) | 8;
    /// C Lc Rc L R Ls Rs LFE.
    pub const MPEG_7_1_B: u32 = (127 << 16) | 8;
    /// L R C LFE Ls Rs Rls Rrs.
    pub const MPEG_7_1_C: u32 = (128 << 16) | 8;
    /// Discrete channels in physical order; OR the channel count into the low 16 bits.
    pub const DISCRETE_IN_ORDER: u32 = 147 << 16;

    /// Channel count encoded in the low 16 bits of a tag.
    pub fn channel_count(tag: u32) -> u32 {
        tag & 0xFFFF
    }
}

/// Semantic assignment of one audio channel.
///
/// Variant names follow the CoreAudio channel label names.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ChannelLabel {
    Left,
    Right,
    Center,
    LFEScreen,
    LeftSurround,
    RightSurround,
    LeftCenter,
    RightCenter,
    CenterSurround,
    LeftSurroundDirect,
    RightSurroundDirect,
    TopCenterSurround,
    VerticalHeightLeft,
    VerticalHeightCenter,
    VerticalHeightRight,
    TopBackLeft,
    TopBackCenter,
    TopBackRight,
    RearSurroundLeft,
    RearSurroundRight,
    LeftWide,
    RightWide,
    LFE2,
    LeftTotal,
    RightTotal,
    HearingImpaired,
    Narration,
    Mono,
    DialogCentricMix,
    CenterSurroundDirect,
    AmbisonicW,
    AmbisonicX,
    AmbisonicY,
    AmbisonicZ,
    MsMid,
    MsSide,
    XyX,
    XyY,
    HeadphonesLeft,
    HeadphonesRight,
    ClickTrack,
    ForeignLanguage,
    /// Unlabelled discrete channel.
    Discrete,
    /// Discrete channel with an explicit index.
    DiscreteN(u16),
}

const DISCRETE_N_BASE: u32 = 1 << 16;

impl ChannelLabel {
    /// Decode a CoreAudio channel label code.
    pub fn from_code(code: u32) -> Option<Self> {
        use ChannelLabel::*;
        let label = match code {
            1 => Left,
            2 => Right,
            3 => Center,
            4 => LFEScreen,
            5 => LeftSurround,
            6 => RightSurround,
            7 => LeftCenter,
            8 => RightCenter,
            9 => CenterSurround,
            10 => LeftSurroundDirect,
            11 => RightSurroundDirect,
            12 => TopCenterSurround,
            13 => VerticalHeightLeft,
            14 => VerticalHeightCenter,
            15 => VerticalHeightRight,
            16 => TopBackLeft,
            17 => TopBackCenter,
            18 => TopBackRight,
            33 => RearSurroundLeft,
            34 => RearSurroundRight,
            35 => LeftWide,
            36 => RightWide,
            37 => LFE2,
            38 => LeftTotal,
            39 => RightTotal,
            40 => HearingImpaired,
            41 => Narration,
            42 => Mono,
            43 => DialogCentricMix,
            44 => CenterSurroundDirect,
            200 => AmbisonicW,
            201 => AmbisonicX,
            202 => AmbisonicY,
            203 => AmbisonicZ,
            204 => MsMid,
            205 => MsSide,
            206 => XyX,
            207 => XyY,
            301 => HeadphonesLeft,
            302 => HeadphonesRight,
            304 => ClickTrack,
            305 => ForeignLanguage,
            400 => Discrete,
            c if (DISCRETE_N_BASE..=DISCRETE_N_BASE | 0xFFFF).contains(&c) => {
                DiscreteN((c - DISCRETE_N_BASE) as u16)
            }
            _ => return None,
        };
        Some(label)
    }

    /// CoreAudio channel label code.
    pub fn code(self) -> u32 {
        use ChannelLabel::*;
        match self {
            Left => 1,
            Right => 2,
            Center => 3,
            LFEScreen => 4,
            LeftSurround => 5,
            RightSurround => 6,
            LeftCenter => 7,
            RightCenter => 8,
            CenterSurround => 9,
            LeftSurroundDirect => 10,
            RightSurroundDirect => 11,
            TopCenterSurround => 12,
            VerticalHeightLeft => 13,
            VerticalHeightCenter => 14,
            VerticalHeightRight => 15,
            TopBackLeft => 16,
            TopBackCenter => 17,
            TopBackRight => 18,
            RearSurroundLeft => 33,
            RearSurroundRight => 34,
            LeftWide => 35,
            RightWide => 36,
            LFE2 => 37,
            LeftTotal => 38,
            RightTotal => 39,
            HearingImpaired => 40,
            Narration => 41,
            Mono => 42,
            DialogCentricMix => 43,
            CenterSurroundDirect => 44,
            AmbisonicW => 200,
            AmbisonicX => 201,
            AmbisonicY => 202,
            AmbisonicZ => 203,
            MsMid => 204,
            MsSide => 205,
            XyX => 206,
            XyY => 207,
            HeadphonesLeft => 301,
            HeadphonesRight => 302,
            ClickTrack => 304,
            ForeignLanguage => 305,
            Discrete => 400,
            DiscreteN(n) => DISCRETE_N_BASE | u32::from(n),
        }
    }
}

impl fmt::Display for ChannelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiscreteN(n) => write!(f, "Discrete_{n}"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

// Speaker bitmap bit order; bit `i` maps to `BITMAP_LABELS[i]`.
const BITMAP_LABELS: [ChannelLabel; 18] = [
    ChannelLabel::Left,
    ChannelLabel::Right,
    ChannelLabel::Center,
    ChannelLabel::LFEScreen,
    ChannelLabel::LeftSurround,
    ChannelLabel::RightSurround,
    ChannelLabel::LeftCenter,
    ChannelLabel::RightCenter,
    ChannelLabel::CenterSurround,
    ChannelLabel::LeftSurroundDirect,
    ChannelLabel::RightSurroundDirect,
    ChannelLabel::TopCenterSurround,
    ChannelLabel::VerticalHeightLeft,
    ChannelLabel::VerticalHeightCenter,
    ChannelLabel::VerticalHeightRight,
    ChannelLabel::TopBackLeft,
    ChannelLabel::TopBackCenter,
    ChannelLabel::TopBackRight,
];

/// Raw channel layout as stored by the container.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChannelLayout {
    /// Layout tag, see [`layout_tag`].
    pub tag: u32,
    /// Per-channel label codes, used with [`layout_tag::USE_CHANNEL_DESCRIPTIONS`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<u32>,
    /// Speaker bitmap, used with [`layout_tag::USE_CHANNEL_BITMAP`].
    #[serde(default)]
    pub bitmap: u32,
}

impl ChannelLayout {
    /// Layout identified by tag alone.
    pub fn from_tag(tag: u32) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    /// Single mono channel.
    pub fn mono() -> Self {
        Self::from_tag(layout_tag::MONO)
    }

    /// Left/right pair.
    pub fn stereo() -> Self {
        Self::from_tag(layout_tag::STEREO)
    }

    /// Explicit per-channel labels.
    pub fn with_labels(labels: &[ChannelLabel]) -> Self {
        Self {
            tag: layout_tag::USE_CHANNEL_DESCRIPTIONS,
            descriptions: labels.iter().map(|l| l.code()).collect(),
            bitmap: 0,
        }
    }

    /// Speaker bitmap.
    pub fn with_bitmap(bitmap: u32) -> Self {
        Self {
            tag: layout_tag::USE_CHANNEL_BITMAP,
            descriptions: Vec::new(),
            bitmap,
        }
    }

    /// Resolve the layout to ordered labels, index = physical channel.
    pub fn labels(&self) -> MovtrackResult<Vec<ChannelLabel>> {
        match self.tag {
            layout_tag::USE_CHANNEL_DESCRIPTIONS => self
                .descriptions
                .iter()
                .map(|&code| {
                    ChannelLabel::from_code(code).ok_or_else(|| {
                        MovtrackError::unknown_layout(format!("channel label code {code}"))
                    })
                })
                .collect(),
            layout_tag::USE_CHANNEL_BITMAP => bitmap_labels(self.bitmap),
            tag if tag & 0xFFFF_0000 == layout_tag::DISCRETE_IN_ORDER => {
                let n = layout_tag::channel_count(tag) as u16;
                Ok((0..n).map(ChannelLabel::DiscreteN).collect())
            }
            tag => tag_labels(tag).map(<[ChannelLabel]>::to_vec).ok_or_else(|| {
                MovtrackError::unknown_layout(format!("layout tag {tag:#010x}"))
            }),
        }
    }
}

/// One entry of a channel map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChannelMapEntry {
    /// Semantic assignment of the channel.
    pub assignment: ChannelLabel,
}

/// Map a layout to per-channel assignments; the result always has `channel_count` entries.
pub fn channel_map(
    layout: &ChannelLayout,
    channel_count: u32,
) -> MovtrackResult<Vec<ChannelMapEntry>> {
    let labels = layout.labels()?;
    if labels.len() != channel_count as usize {
        return Err(MovtrackError::validation(format!(
            "channel layout describes {} channels, track has {channel_count}",
            labels.len()
        )));
    }
    tracing::trace!(tag = layout.tag, channels = channel_count, "resolved channel map");
    Ok(labels
        .into_iter()
        .map(|assignment| ChannelMapEntry { assignment })
        .collect())
}

fn bitmap_labels(bitmap: u32) -> MovtrackResult<Vec<ChannelLabel>> {
    let known = (1u32 << BITMAP_LABELS.len()) - 1;
    if bitmap & !known != 0 {
        return Err(MovtrackError::unknown_layout(format!(
            "channel bitmap bits {:#x}",
            bitmap & !known
        )));
    }
    Ok(BITMAP_LABELS
        .iter()
        .enumerate()
        .filter(|(bit, _)| bitmap & (1 << bit) != 0)
        .map(|(_, &label)| label)
        .collect())
}

fn tag_labels(tag: u32) -> Option<&'static [ChannelLabel]> {
    use ChannelLabel::*;
    let labels: &'static [ChannelLabel] = match tag {
        layout_tag::MONO => &[Mono],
        layout_tag::STEREO => &[Left, Right],
        layout_tag::STEREO_HEADPHONES => &[HeadphonesLeft, HeadphonesRight],
        layout_tag::MATRIX_STEREO => &[LeftTotal, RightTotal],
        layout_tag::MID_SIDE => &[MsMid, MsSide],
        layout_tag::XY => &[XyX, XyY],
        layout_tag::BINAURAL => &[HeadphonesLeft, HeadphonesRight],
        layout_tag::AMBISONIC_B_FORMAT => &[AmbisonicW, AmbisonicX, AmbisonicY, AmbisonicZ],
        layout_tag::QUADRAPHONIC => &[Left, Right, LeftSurround, RightSurround],
        layout_tag::PENTAGONAL => &[Left, Right, LeftSurround, RightSurround, Center],
        layout_tag::HEXAGONAL => &[
            Left,
            Right,
            LeftSurround,
            RightSurround,
            Center,
            CenterSurround,
        ],
        layout_tag::OCTAGONAL => &[
            Left,
            Right,
            LeftSurround,
            RightSurround,
            Center,
            CenterSurround,
            LeftWide,
            RightWide,
        ],
        layout_tag::CUBE => &[
            Left,
            Right,
            LeftSurround,
            RightSurround,
            VerticalHeightLeft,
            VerticalHeightRight,
            TopBackLeft,
            TopBackRight,
        ],
        layout_tag::MPEG_3_0_A => &[Left, Right, Center],
        layout_tag::MPEG_3_0_B => &[Center, Left, Right],
        layout_tag::MPEG_4_0_A => &[Left, Right, Center, CenterSurround],
        layout_tag::MPEG_4_0_B => &[Center, Left, Right, CenterSurround],
        layout_tag::MPEG_5_0_A => &[Left, Right, Center, LeftSurround, RightSurround],
        layout_tag::MPEG_5_0_B => &[Left, Right, LeftSurround, RightSurround, Center],
        layout_tag::MPEG_5_0_C => &[Left, Center, Right, LeftSurround, RightSurround],
        layout_tag::MPEG_5_0_D => &[Center, Left, Right, LeftSurround, RightSurround],
        layout_tag::MPEG_5_1_A => &[
            Left,
            Right,
            Center,
            LFEScreen,
            LeftSurround,
            RightSurround,
        ],
        layout_tag::MPEG_5_1_B => &[
            Left,
            Right,
            LeftSurround,
            RightSurround,
            Center,
            LFEScreen,
        ],
        layout_tag::MPEG_5_1_C => &[
            Left,
            Center,
            Right,
            LeftSurround,
            RightSurround,
            LFEScreen,
        ],
        layout_tag::MPEG_5_1_D => &[
            Center,
            Left,
            Right,
            LeftSurround,
            RightSurround,
            LFEScreen,
        ],
        layout_tag::MPEG_6_1_A => &[
            Left,
            Right,
            Center,
            LFEScreen,
            LeftSurround,
            RightSurround,
            CenterSurround,
        ],
        layout_tag::MPEG_7_1_A => &[
            Left,
            Right,
            Center,
            LFEScreen,
            LeftSurround,
            RightSurround,
            LeftCenter,
            RightCenter,
        ],
        layout_tag::MPEG_7_1_B => &[
            Center,
            LeftCenter,
            RightCenter,
            Left,
            Right,
            LeftSurround,
            RightSurround,
            LFEScreen,
        ],
        layout_tag::MPEG_7_1_C => &[
            Left,
            Right,
            Center,
            LFEScreen,
            LeftSurround,
            RightSurround,
            RearSurroundLeft,
            RearSurroundRight,
        ],
        _ => return None,
    };
    Some(labels)
}

#[cfg(test)]
#[path = "../../tests/unit/audio/channel.rs"]
mod tests;
