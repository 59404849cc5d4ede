use printpdf::Rgb;

/// Grid line and text color
pub const BLACK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

/// Open cell fill
pub const WHITE: Rgb = Rgb {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    icc_profile: None,
};

/// Block cell fill (#555)
pub const BLOCK_GRAY: Rgb = Rgb {
    r: 0.333,
    g: 0.333,
    b: 0.333,
    icc_profile: None,
};

/// Shaded highlight fill (#DDD)
pub const SHADE_GRAY: Rgb = Rgb {
    r: 0.867,
    g: 0.867,
    b: 0.867,
    icc_profile: None,
};
