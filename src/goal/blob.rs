use crate::core::Colour;
use crate::logic::Grid;

/// Flood-fill state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Matched,
    Unmatched,
}

/// Size of the largest 4-connected region of `colour`.
pub fn blob_score(grid: &Grid, colour: Colour) -> u32 {
    blob_sizes(grid, colour).into_iter().max().unwrap_or(0)
}

/// Every blob of `colour` in scan order. Each cell is visited at most once,
/// so the sizes add up to the number of `colour` cells.
pub fn blob_sizes(grid: &Grid, colour: Colour) -> Vec<u32> {
    let mut visited: Vec<Vec<Visit>> = grid
        .iter()
        .map(|column| vec![Visit::Unvisited; column.len()])
        .collect();

    let mut sizes = Vec::new();
    for x in 0..grid.len() {
        for y in 0..grid[x].len() {
            let size = undiscovered_blob_size(grid, colour, &mut visited, x, y);
            if size > 0 {
                sizes.push(size);
            }
        }
    }
    sizes
}

/// 未訪問セルだけで構成される、(x, y) を含むブロブの大きさ
fn undiscovered_blob_size(
    grid: &Grid,
    colour: Colour,
    visited: &mut [Vec<Visit>],
    x: usize,
    y: usize,
) -> u32 {
    if visited[x][y] != Visit::Unvisited {
        return 0;
    }
    if grid[x][y] != colour {
        visited[x][y] = Visit::Unmatched;
        return 0;
    }

    let width = grid.len();
    let mut size = 0;
    let mut stack = vec![(x, y)];
    visited[x][y] = Visit::Matched;

    while let Some((cx, cy)) = stack.pop() {
        size += 1;
        let height = grid[cx].len();
        let neighbours = [
            cx.checked_sub(1).map(|nx| (nx, cy)),
            (cx + 1 < width).then(|| (cx + 1, cy)),
            cy.checked_sub(1).map(|ny| (cx, ny)),
            (cy + 1 < height).then(|| (cx, cy + 1)),
        ];
        for (nx, ny) in neighbours.into_iter().flatten() {
            if visited[nx][ny] != Visit::Unvisited {
                continue;
            }
            if grid[nx][ny] == colour {
                visited[nx][ny] = Visit::Matched;
                stack.push((nx, ny));
            } else {
                visited[nx][ny] = Visit::Unmatched;
            }
        }
    }
    size
}
