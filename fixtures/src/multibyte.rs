//! Non-ASCII corpus shared by the multibyte, comment and volume fixtures.
//!
//! Every line starts with a character whose UTF-8 encoding is longer than one
//! byte, so a split one byte into the line always lands inside a code point.

pub const LINES: &[&str] = &[
    "我現在都看實況不玩遊戲",
    "Съешь же ещё этих мягких французских булок, да выпей чаю",
    "いろはにほへと ちりぬるを わかよたれそ つねならむ",
    "다람쥐 헌 쳇바퀴에 타고파",
    "Ξεσκεπάζω την ψυχοφθόρα βδελυγμία",
    "นายสังฆภัณฑ์ เฮงพิทักษ์ฝา ผู้เฒ่าซื่อกระดูกขี้ไก่",
    "ऋषियों को सताने वाले दुष्ट राक्षसों के राजा रावण का सर्वनाश",
    "صِف خَلقَ خَودِ كَمِثلِ الشَمسِ إِذ بَزَغَت",
    "Γαζέες καὶ μυρτιὲς δὲν θὰ βρῶ πιὰ στὸ χρυσαφὶ ξέφωτο",
    "Árvíztűrő tükörfúrógép",
];

/// Includes multi-code-point sequences (skin tones, ZWJ families, flags).
pub const EMOJIS: &[&str] = &[
    "😀", "😃", "😄", "😁", "😆", "😅", "🤣", "😂", "🙂", "🙃",
    "😉", "😊", "😇", "🥰", "😍", "🤩", "😘", "😗", "😚", "😙",
    "😋", "😛", "😜", "🤪", "😝", "🤑", "🤗", "🤭", "🤫", "🤔",
    "🤐", "🤨", "😐", "😑", "😶", "😏", "😒", "🙄", "😬", "🤥",
    "😌", "😔", "😪", "🤤", "😴", "😷", "🤒", "🤕", "🤢", "🤮",
    "🤧", "🥵", "🥶", "🥴", "😵", "🤯", "🤠", "🥳", "😎", "🤓",
    "🧐", "😕", "😟", "🙁", "☹️", "😮", "😯", "😲", "😳", "🥺",
    "😦", "😧", "😨", "😰", "😥", "😢", "😭", "😱", "😖", "😣",
    "😞", "😓", "😩", "😫", "🥱", "😤", "😡", "😠", "🤬", "😈",
    "👿", "💀", "☠️", "💩", "🤡", "👹", "👺", "👻", "👽", "👾",
    "🤖", "👋🏽", "👨‍👩‍👧‍👦", "🏳️‍🌈", "🇳🇴", "🇯🇵", "🧑‍🚀", "❤️‍🔥", "🫠", "🪐",
    "🦀",
];
