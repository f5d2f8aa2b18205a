//! Геометрия раскладки. Решений о ходах здесь нет,
//! только прямоугольники, которые отдаются слою отрисовки.

use serde::{Deserialize, Serialize};

/// Размеры карт и отступы. Неизменяемое значение, передаётся в раскладку явно.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Geometry {
    pub card_width: u32,
    pub card_height: u32,
    /// Общий зазор между виджетами.
    pub card_gap: u32,
    /// Видимая часть карты в веере.
    pub card_overlap: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            card_width: 73,
            card_height: 97,
            card_gap: 15,
            card_overlap: 20,
        }
    }
}

/// Прямоугольник на экране.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Widget {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Widget {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Минимальный размер поля.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

/// Как контейнер размещается на поле.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Placement {
    /// Без геометрии (служебные стопки).
    #[default]
    Hidden,
    /// Один виджет.
    Single(Widget),
    /// `count` виджетов в ряд слева направо с зазором `gap`.
    Horizontal {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        gap: u32,
        count: u32,
    },
}

impl Placement {
    pub fn widgets(&self) -> Vec<Widget> {
        match *self {
            Placement::Hidden => Vec::new(),
            Placement::Single(w) => vec![w],
            Placement::Horizontal {
                x,
                y,
                width,
                height,
                gap,
                count,
            } => (0..count)
                .map(|i| Widget::new(x + i * (width + gap), y, width, height))
                .collect(),
        }
    }
}

/// Минимальный размер, вмещающий все виджеты.
pub fn minimum_size<'a, I>(placements: I) -> Dimension
where
    I: IntoIterator<Item = &'a Placement>,
{
    let mut min = Dimension::default();
    for w in placements.into_iter().flat_map(|p| p.widgets()) {
        min.width = min.width.max(w.x + w.width);
        min.height = min.height.max(w.y + w.height);
    }
    min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_row_extends_by_width_and_gap() {
        let row = Placement::Horizontal {
            x: 10,
            y: 20,
            width: 73,
            height: 97,
            gap: 15,
            count: 3,
        };
        let ws = row.widgets();
        assert_eq!(ws.len(), 3);
        assert_eq!(ws[2].x, 10 + 2 * 88);

        let dim = minimum_size([&row, &Placement::Hidden]);
        assert_eq!(dim, Dimension { width: 10 + 2 * 88 + 73, height: 117 });
    }
}
