//! Inline styles. The site is a handful of cards on an orange/yellow
//! gradient, so plain style strings are enough.

pub const FONT: &str =
    "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;";

/// Full-height page, gradient running top-left to bottom-right.
pub const PAGE_WARM: &str = "min-height: 100vh; padding: 32px 0; background: linear-gradient(135deg, #FEF08A, #FB923C);";
/// Same gradient reversed, used by the ceremony page.
pub const PAGE_WARM_REVERSED: &str = "min-height: 100vh; padding: 32px 0; background: linear-gradient(135deg, #FB923C, #FEF08A);";
pub const PAGE_CENTERED: &str = "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: linear-gradient(135deg, #FEF08A, #FB923C);";

pub const CONTAINER: &str = "max-width: 1024px; margin: 0 auto; padding: 0 16px;";
pub const CARD: &str = "background: rgba(255, 255, 255, 0.85); border-radius: 24px; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); padding: 32px; max-width: 672px; margin: 0 auto;";
pub const CARD_WIDE: &str = "background: rgba(255, 255, 255, 0.95); border-radius: 24px; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); overflow: hidden; max-width: 896px; margin: 0 auto;";
pub const CARD_NARROW: &str = "background: rgba(255, 255, 255, 0.9); border-radius: 24px; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); padding: 48px; max-width: 512px; margin: 0 auto; text-align: center;";

pub const STATUS_TEXT: &str = "font-size: 24px; font-weight: 600; color: #9A3412;";
pub const STATUS_ERROR: &str = "font-size: 24px; font-weight: 600; color: #DC2626;";

pub const FRIEND_ROW: &str = "display: flex; justify-content: space-between; align-items: center; padding: 24px; margin-bottom: 16px; border-radius: 16px; border: 2px solid #FED7AA; background: linear-gradient(90deg, #FFEDD5, #FEF9C3); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);";
pub const PRIMARY_BUTTON: &str = "display: inline-block; border: none; cursor: pointer; color: white; font-weight: bold; border-radius: 16px; padding: 16px 48px; font-size: 24px; background: linear-gradient(90deg, #F97316, #EF4444); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); text-decoration: none;";
pub const SECONDARY_BUTTON: &str = "display: inline-block; color: white; font-weight: bold; border-radius: 12px; padding: 12px 32px; background: linear-gradient(90deg, #F97316, #EF4444); text-decoration: none;";
pub const TEXT_LINK: &str = "color: #EA580C; text-decoration: underline; font-weight: 500;";

pub const HERO: &str = "padding: 32px; text-align: center; background: linear-gradient(90deg, #FB923C, #FDE047);";
pub const INFO_BLOCK: &str = "border-radius: 16px; padding: 24px; background: #FFF7ED;";
pub const INFO_BLOCK_ALT: &str = "border-radius: 16px; padding: 24px; background: #FEFCE8;";
pub const HIGHLIGHT: &str = "border-radius: 16px; padding: 24px; margin-bottom: 32px; background: linear-gradient(90deg, #FFEDD5, #FEF9C3);";
