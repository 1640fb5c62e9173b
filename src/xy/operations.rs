use super::borders::find_borders;
use super::xy::XY;
use super::xyerror::XYError;

impl XY {
    /// Stable sort ascending by X; NaN abscissas go last.
    pub fn sort_by_x(&mut self) {
        self.points_mut().sort_by(|a, b| a.x().total_cmp(&b.x()));
    }

    /// Stable sort ascending by Y. Leaves the curve unsorted by X, so
    /// restore the order with [`XY::sort_by_x`] before using the core
    /// operations.
    pub fn sort_by_y(&mut self) {
        self.points_mut().sort_by(|a, b| a.y().total_cmp(&b.y()));
    }

    /// Keeps only the samples whose X lies in `[x1, x2]`.
    ///
    /// On error the curve is left untouched.
    pub fn cut(&mut self, x1: f64, x2: f64) -> Result<(), XYError> {
        let (left, right) = find_borders(self.points(), x1, x2)?;
        let data = self.points_mut();
        data.truncate(right + 1);
        data.drain(..left);
        Ok(())
    }

    /// Applies `f` to every abscissa and re-sorts.
    pub fn modify_x<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64
    {
        for p in self.points_mut().iter_mut() {
            p.set_x(f(p.x()));
        }
        self.sort_by_x();
    }

    pub fn modify_y<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64
    {
        for p in self.points_mut().iter_mut() {
            p.set_y(f(p.y()));
        }
    }
}
