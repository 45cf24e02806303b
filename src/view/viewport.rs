//! Scroll state of the text area

/// The visible window onto the buffer, in lines and display columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible line
    pub top_line: usize,
    /// First visible display column
    pub left_column: usize,
    /// Text columns available, excluding the gutter
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn visible_line_count(&self) -> usize {
        self.height as usize
    }

    /// Scroll the minimum amount so that (`line`, `column`) is on screen
    pub fn ensure_visible(&mut self, line: usize, column: usize) {
        let height = (self.height as usize).max(1);
        if line < self.top_line {
            self.top_line = line;
        } else if line >= self.top_line + height {
            self.top_line = line + 1 - height;
        }

        // Keep one spare column so the cursor can sit after the last char
        let width = (self.width as usize).max(1);
        if column < self.left_column {
            self.left_column = column;
        } else if column >= self.left_column + width {
            self.left_column = column + 1 - width;
        }
    }
}

/// Width of the line-number gutter, including the separator column
pub fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.max(1).ilog10() as u16 + 1;
    digits.max(3) + 1
}
