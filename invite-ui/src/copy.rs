//! User-visible text.

pub const LOADING: &str = "Đang tải...";

// Homepage
pub const HOME_TITLE: &str = "LỄ TỐT NGHIỆP 2025";
pub const HOST_NAME: &str = "Nguyen Van Tuyen";
pub const HOME_SUBTITLE: &str = "Mời các bạn tham dự lễ tốt nghiệp";
pub const FRIEND_LIST_HEADING: &str = "Danh sách bạn bè";
pub const OPEN_INVITATION_HINT: &str = "Nhấn để mở thiệp mời →";
pub const FRIENDS_UNAVAILABLE: &str = "Không thể tải danh sách bạn bè!";
pub const NO_FRIENDS: &str = "Chưa có bạn bè nào.";

// Invitation
pub const INVITATION_DATE: &str = "Ngày 19/8/2025";
pub const INVITATION_MESSAGE: &str = "Bạn đã chọn ngày để đến dự lễ tốt nghiệp của tôi";
pub const CONFIRM_BUTTON: &str = "Ngày";
pub const FRIEND_NOT_FOUND: &str = "Không tìm thấy bạn bè!";

// Ceremony
pub const ORGANIZATION: &str = "FPT Education";
pub const UNIVERSITY: &str = "FPT UNIVERSITY";
pub const HERO_TITLE: &str = "GRADUATION";
pub const HERO_SUBTITLE: &str = "CEREMONY";
pub const HERO_YEAR: &str = "2025";
pub const TAGLINE: &str = "Thread of Connection";
pub const GRADUATE_LABEL: &str = "TÂN CỬ NHÂN";
pub const MAJOR_LABEL: &str = "CHUYÊN NGÀNH";
pub const INVITEE_PREFIX: &str = "This invitation is for:";
pub const TIME_LABEL: &str = "Thời gian";
pub const VENUE_LABEL: &str = "Địa điểm";
pub const INFO_NOT_FOUND: &str = "Không tìm thấy thông tin!";

pub const PAGE_NOT_FOUND: &str = "Không tìm thấy trang!";
pub const BACK_HOME: &str = "← Quay lại trang chủ";
