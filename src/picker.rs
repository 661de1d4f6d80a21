//! Picker layout: saturation/value surface, hue slider, and readout stacked
//! vertically, all sharing one picker state.

use floem::prelude::*;
use floem::reactive::RwSignal;

use crate::constants;
use crate::hue_slider::hue_slider;
use crate::readout::color_readout;
use crate::state::PickerState;
use crate::sv_area::sv_area;

pub(crate) fn picker(state: RwSignal<PickerState>) -> impl IntoView {
    v_stack((
        sv_area(state),
        hue_slider(state).style(|s| s.width_full()),
        color_readout(state),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .background(Color::rgb8(242, 242, 242))
    })
}
