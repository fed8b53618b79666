pub const SITE_ID: &str = "site_id";
pub const MOBILE_ID: &str = "mobile_id";
pub const SHIFT_ID: &str = "shift_id";
pub const NEAREST_SITE: &str = "nearest_site";
pub const COORD_X: &str = "x";
pub const COORD_Y: &str = "y";
pub const COORD_Z: &str = "z";
pub const WRAPPED_X: &str = "wrapped_x";
pub const WRAPPED_Y: &str = "wrapped_y";
