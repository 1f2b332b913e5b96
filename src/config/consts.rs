// src/config/consts.rs

// Window
pub const APP_TITLE: &str = "오늘의 서평";
pub const WINDOW_W: f32 = 900.0;
pub const WINDOW_H: f32 = 760.0;

// Data
pub const DEFAULT_DATA_SOURCE: &str = "public/data.json";
pub const DATA_SOURCE_ENV: &str = "REVIEWS_DATA";
pub const LOADER_THREAD: &str = "loader";
pub const USER_AGENT: &str = concat!("review_deck/", env!("CARGO_PKG_VERSION"));

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Outlet key → display name
pub const OUTLET_NAMES: &[(&str, &str)] = &[
    ("chosun", "조선일보"),
    ("hani", "한겨레"),
    ("donga", "동아일보"),
    ("joongang", "중앙일보"),
    ("khan", "경향신문"),
    ("hankook", "한국일보"),
];

// Screen text
pub const MSG_LOADING: &str = "데이터를 불러오는 중...";
pub const MSG_NO_DATA: &str = "오늘 수집된 기사가 없습니다.";
pub const MSG_NO_DATA_HINT: &str = "터미널에서 크롤러를 실행해보세요.";
pub const MSG_NO_ARTICLES: &str = "이 신문사에서 수집된 기사가 없습니다.";
pub const LINK_LABEL: &str = "원문 전체 보기";

// Fonts probed for Hangul glyphs when --font is not given
pub const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    "C:\\Windows\\Fonts\\malgun.ttf",
];
