//! Per-library configuration blocks.
//!
//! Every block asks the library's configuration helper for flags at make
//! time. Only the HDF5 block checks that the helper returned anything; the
//! others pass through whatever the helper prints.

use super::{RenderContext, BANNER};
use crate::config::Library;

pub fn render(ctx: &RenderContext<'_>) -> String {
    let enabled = ctx.config.enabled_libraries();
    if enabled.is_empty() {
        return String::new();
    }

    let mut out = format!("{BANNER}# Libraries\n");
    for library in enabled {
        out.push_str(&render_library(library));
    }
    out
}

fn render_library(library: Library) -> String {
    let helper = library.helper();
    match library {
        Library::Root => format!(
            concat!(
                "\n",
                "# --- ROOT\n",
                "CXXFLAGS     += $(shell {helper} --cflags)\n",
                "LIBS         += $(shell {helper} --libs)\n",
                "LDFLAGS      += $(shell {helper} --ldflags)\n",
            ),
            helper = helper
        ),
        Library::Hdf5 => format!(
            concat!(
                "\n",
                "# --- HDF5\n",
                "HDF_INFO     := $(shell {helper} -showconfig | grep 'Installation point:')\n",
                "HDF_PATH     := $(strip $(shell echo '$(HDF_INFO)' | cut -d ':' -f 2))\n",
                "ifeq ($(HDF_PATH),)\n",
                "$(error \"couldn't find HDF5 with '{helper} -showconfig', quitting\")\n",
                "endif\n",
                "CXXFLAGS     += -I$(HDF_PATH)/include\n",
                "LIBS         += -L$(HDF_PATH)/lib -Wl,-rpath,$(HDF_PATH)/lib\n",
                "LIBS         += -lhdf5_cpp -lhdf5\n",
            ),
            helper = helper
        ),
        Library::Ndhist => format!(
            concat!(
                "\n",
                "# --- ndhist\n",
                "CXXFLAGS     += $(shell {helper} --cflags)\n",
                "LIBS         += $(shell {helper} --libs)\n",
            ),
            helper = helper
        ),
        Library::Python => format!(
            concat!(
                "\n",
                "# --- Python\n",
                "PY_CFLAGS    := $(shell {helper} --includes)\n",
                "PY_LDFLAGS   := $(shell {helper} --ldflags)\n",
                "CXXFLAGS     += $(PY_CFLAGS)\n",
            ),
            helper = helper
        ),
    }
}
