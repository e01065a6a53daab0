use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{MenuError, Result};
use crate::menu::stats::MenuStats;
use crate::models::{Meal, MealId};

/// One position in the menu: the meal drawn for it and whether it is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSlot {
    pub meal: MealId,
    /// Pinned slots keep their meal through a reshuffle.
    pub pinned: bool,
}

impl MenuSlot {
    fn unpinned(meal: MealId) -> Self {
        Self {
            meal,
            pinned: false,
        }
    }
}

/// Randomly drawn menu over a borrowed meal pool, with per-slot pins.
///
/// The builder starts empty and becomes populated on the first
/// [`generate`](Self::generate) or [`add_slot`](Self::add_slot). Every
/// successful sizing operation leaves the menu free of duplicate pool
/// entries. [`replace_at`](Self::replace_at) is the exception: it stores
/// whatever handle the caller passes.
///
/// Index-based accessors never fail; out-of-range indices read as
/// unpinned/absent and writes to them are ignored.
#[derive(Debug)]
pub struct MenuBuilder<'a, R = StdRng> {
    /// All known meals.
    pool: &'a [Meal],

    /// `None` until a menu is generated.
    slots: Option<Vec<MenuSlot>>,

    rng: R,
}

impl<'a> MenuBuilder<'a, StdRng> {
    /// Create an empty builder seeded from the operating system.
    pub fn from_entropy(pool: &'a [Meal]) -> Self {
        Self::new(pool, StdRng::from_entropy())
    }

    /// Create an empty builder with a reproducible random source.
    pub fn seeded(pool: &'a [Meal], seed: u64) -> Self {
        Self::new(pool, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> MenuBuilder<'a, R> {
    /// Create an empty builder over `pool`.
    pub fn new(pool: &'a [Meal], rng: R) -> Self {
        Self {
            pool,
            slots: None,
            rng,
        }
    }

    /// Create an empty builder from a pool that may be absent.
    ///
    /// Fails with [`MenuError::InvalidArgument`] when `pool` is `None`.
    pub fn try_new(pool: Option<&'a [Meal]>, rng: R) -> Result<Self> {
        let pool = pool.ok_or_else(|| {
            MenuError::InvalidArgument("meal pool may not be absent".to_string())
        })?;
        Ok(Self::new(pool, rng))
    }

    /// Create a builder and immediately draw a menu of `num_meals`.
    pub fn with_size(pool: &'a [Meal], rng: R, num_meals: usize) -> Result<Self> {
        let mut builder = Self::new(pool, rng);
        builder.generate(num_meals)?;
        Ok(builder)
    }

    /// The pool meals are drawn from.
    pub fn pool(&self) -> &'a [Meal] {
        self.pool
    }

    /// Draw a fresh menu of `num_meals` distinct meals, discarding the
    /// current menu and all pins.
    pub fn generate(&mut self, num_meals: usize) -> Result<()> {
        self.ensure_pool_holds(num_meals)?;

        let mut slots = Vec::with_capacity(num_meals);
        for _ in 0..num_meals {
            let meal = draw_unique(&mut self.rng, self.pool.len(), &slots);
            slots.push(MenuSlot::unpinned(meal));
        }

        tracing::debug!(
            menu_size = num_meals,
            pool_size = self.pool.len(),
            "generated menu"
        );
        self.slots = Some(slots);
        Ok(())
    }

    /// Replace every unpinned meal with one not already on the menu.
    ///
    /// Does nothing before a menu has been generated. When the menu already
    /// holds the whole pool there is no unused meal left to draw, so the
    /// unpinned meals are permuted among their slots instead.
    pub fn reshuffle(&mut self) -> Result<()> {
        let Some(menu_len) = self.slots.as_ref().map(Vec::len) else {
            return Ok(());
        };
        self.ensure_pool_holds(menu_len)?;

        let pool_len = self.pool.len();
        let rng = &mut self.rng;
        let Some(slots) = self.slots.as_mut() else {
            return Ok(());
        };

        if pool_len == menu_len {
            permute_unpinned(rng, slots);
            tracing::debug!(menu_size = menu_len, "pool saturated, permuted unpinned slots");
            return Ok(());
        }

        let mut replaced = 0usize;
        for i in 0..slots.len() {
            if slots[i].pinned {
                continue;
            }
            // Checked against the in-progress menu so earlier replacements
            // are not drawn again for later slots.
            let meal = draw_unique(&mut *rng, pool_len, slots.as_slice());
            slots[i].meal = meal;
            replaced += 1;
        }

        tracing::debug!(menu_size = menu_len, replaced, "reshuffled menu");
        Ok(())
    }

    /// Put `meal` into slot `index`, ignoring the slot's pin.
    ///
    /// No duplicate check is made. Out-of-range indices and handles outside
    /// the pool are ignored.
    pub fn replace_at(&mut self, index: usize, meal: MealId) {
        if meal.index() >= self.pool.len() {
            return;
        }
        if let Some(slot) = self.slots.as_mut().and_then(|s| s.get_mut(index)) {
            slot.meal = meal;
        }
    }

    /// Append one more meal not already on the menu.
    pub fn add_slot(&mut self) -> Result<()> {
        self.ensure_pool_holds(self.len() + 1)?;

        let pool_len = self.pool.len();
        let slots = self.slots.get_or_insert_with(Vec::new);
        let meal = draw_unique(&mut self.rng, pool_len, slots.as_slice());
        slots.push(MenuSlot::unpinned(meal));

        tracing::debug!(menu_size = slots.len(), "added menu slot");
        Ok(())
    }

    fn ensure_pool_holds(&self, requested: usize) -> Result<()> {
        if self.pool.is_empty() || self.pool.len() < requested {
            return Err(MenuError::pool_too_small(self.pool.len(), requested));
        }
        Ok(())
    }
}

impl<'a, R> MenuBuilder<'a, R> {
    /// Flip the pin on slot `index` and return the new state.
    ///
    /// Returns `false` for an invalid index.
    pub fn toggle_pin(&mut self, index: usize) -> bool {
        match self.slots.as_mut().and_then(|s| s.get_mut(index)) {
            Some(slot) => {
                slot.pinned = !slot.pinned;
                slot.pinned
            }
            None => false,
        }
    }

    pub fn is_pinned(&self, index: usize) -> bool {
        self.slot(index).map(|s| s.pinned).unwrap_or(false)
    }

    /// The meal in slot `index`, if any.
    pub fn get(&self, index: usize) -> Option<&'a Meal> {
        let pool = self.pool;
        self.slot(index).and_then(|s| pool.get(s.meal.index()))
    }

    /// The pool handle in slot `index`, if any.
    pub fn meal_id(&self, index: usize) -> Option<MealId> {
        self.slot(index).map(|s| s.meal)
    }

    /// Number of meals on the menu (0 before generation).
    pub fn len(&self) -> usize {
        self.slots.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a menu has been generated yet.
    pub fn is_populated(&self) -> bool {
        self.slots.is_some()
    }

    pub fn slots(&self) -> &[MenuSlot] {
        self.slots.as_deref().unwrap_or(&[])
    }

    pub fn pinned_count(&self) -> usize {
        self.slots().iter().filter(|s| s.pinned).count()
    }

    /// Iterate over `(slot index, meal, pinned)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a Meal, bool)> + '_ {
        let pool = self.pool;
        self.slots()
            .iter()
            .enumerate()
            .filter_map(move |(i, s)| pool.get(s.meal.index()).map(|m| (i, m, s.pinned)))
    }

    /// Aggregate ratings over the current menu.
    pub fn stats(&self) -> MenuStats {
        MenuStats::from_meals(self.iter().map(|(_, meal, _)| meal))
    }

    pub fn average_prep_time(&self) -> f64 {
        self.stats().average_prep_time
    }

    pub fn average_naughtiness(&self) -> f64 {
        self.stats().average_naughtiness
    }

    pub fn average_cost(&self) -> f64 {
        self.stats().average_cost
    }

    pub fn average_heaviness(&self) -> f64 {
        self.stats().average_heaviness
    }

    pub fn leftovers_count(&self) -> usize {
        self.stats().leftovers_count
    }

    fn slot(&self, index: usize) -> Option<&MenuSlot> {
        self.slots.as_ref().and_then(|s| s.get(index))
    }
}

/// Draw a pool handle not present in `taken`.
///
/// Samples uniformly and rejects collisions. Callers guarantee that
/// `pool_len > taken.len()`, so an unused handle always exists.
fn draw_unique<R: Rng + ?Sized>(rng: &mut R, pool_len: usize, taken: &[MenuSlot]) -> MealId {
    let mut rejected = 0u32;
    loop {
        let candidate = MealId(rng.gen_range(0..pool_len));
        if !taken.iter().any(|s| s.meal == candidate) {
            if rejected > 0 {
                tracing::trace!(rejected, "resampled after collisions");
            }
            return candidate;
        }
        rejected += 1;
    }
}

/// Shuffle the meals of unpinned slots among those same slots.
fn permute_unpinned<R: Rng + ?Sized>(rng: &mut R, slots: &mut [MenuSlot]) {
    let mut meals: Vec<MealId> = slots
        .iter()
        .filter(|s| !s.pinned)
        .map(|s| s.meal)
        .collect();
    meals.shuffle(rng);

    for (slot, meal) in slots.iter_mut().filter(|s| !s.pinned).zip(meals) {
        slot.meal = meal;
    }
}
