// 视口
//
// 职责：描述文档映射到终端屏幕的矩形区域，并在光标移出时做最小滚动

use crate::core::Position;

/// 视口：左上角对应的文档坐标 + 可见行列数
///
/// 可见行列数由渲染器每帧提供，最小为 1。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    top_row: usize,
    left_col: usize,
    visible_rows: usize,
    visible_cols: usize,
}

impl Viewport {
    pub fn new(visible_rows: usize, visible_cols: usize) -> Self {
        Self {
            top_row: 0,
            left_col: 0,
            visible_rows: visible_rows.max(1),
            visible_cols: visible_cols.max(1),
        }
    }

    /// 指定滚动偏移（不做收敛，调用方随后应执行 `reconcile`）
    pub fn scrolled_to(mut self, top_row: usize, left_col: usize) -> Self {
        self.top_row = top_row;
        self.left_col = left_col;
        self
    }

    pub fn top_row(&self) -> usize {
        self.top_row
    }

    pub fn left_col(&self) -> usize {
        self.left_col
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn visible_cols(&self) -> usize {
        self.visible_cols
    }

    /// 更新可见行列数（终端尺寸变化）
    pub fn resize(&mut self, visible_rows: usize, visible_cols: usize) {
        self.visible_rows = visible_rows.max(1);
        self.visible_cols = visible_cols.max(1);
    }

    /// 光标是否处于可见区域内
    pub fn contains(&self, pos: Position) -> bool {
        (self.top_row..self.top_row + self.visible_rows).contains(&pos.row)
            && (self.left_col..self.left_col + self.visible_cols).contains(&pos.col)
    }

    /// 视口收敛：最小滚动使光标可见
    ///
    /// 只在光标越界时滚动，不居中，不预滚动。重复调用是幂等的。
    pub fn reconcile(&mut self, cursor: Position) {
        self.top_row = scroll_axis(self.top_row, self.visible_rows, cursor.row);
        self.left_col = scroll_axis(self.left_col, self.visible_cols, cursor.col);
    }
}

/// 单个方向上的收敛规则
fn scroll_axis(offset: usize, extent: usize, target: usize) -> usize {
    if target < offset {
        target
    } else if target >= offset + extent {
        target + 1 - extent
    } else {
        offset
    }
}
