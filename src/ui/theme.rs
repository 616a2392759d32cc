use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub opcode: Color,
    pub register: Color,
    pub number: Color,
    pub label: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub memory_head: Color, // Highlight for the MH cell
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    opcode: Color::Rgb(137, 180, 250),          // Blue for opcodes
    register: Color::Rgb(148, 226, 213),        // Cyan for register names
    number: Color::Rgb(250, 179, 135),          // Orange for literals
    label: Color::Rgb(249, 226, 175),           // Yellow for labels
    border_focused: Color::Rgb(249, 226, 175),  // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),   // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),    // Slightly lighter BG for current line
    memory_head: Color::Rgb(243, 139, 168),     // Red for the memory head cell
};
