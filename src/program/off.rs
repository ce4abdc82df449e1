use super::ProgramContext;

pub(super) fn enter<const N: usize, const SLOTS: usize>(ctx: &mut ProgramContext<'_, N, SLOTS>) {
    ctx.pixels.clear();
}

pub(super) fn tick<const N: usize, const SLOTS: usize>(_ctx: &mut ProgramContext<'_, N, SLOTS>) {}
