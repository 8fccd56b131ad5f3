//! Top level targets: the python extension module and the executables.
//!
//! Each target contributes object bookkeeping to the "Top Level Objects"
//! block and a link rule to the "Build Rules" block.

use super::{RenderContext, BANNER};

pub fn render_objects(ctx: &RenderContext<'_>) -> String {
    let mut out = format!("{BANNER}# Top Level Objects\n");

    if let Some(module) = &ctx.config.python_module {
        out.push_str(&format!(
            concat!(
                "\n",
                "# --- python top level objects\n",
                "PY_LIB_NAME   := {}\n",
                "PY_OBJ        := $(PY_LIB_NAME).o\n",
                "PY_OBJ_PATH   := $(PY_OBJ:%=$(BUILD)/%)\n",
                "PY_SO         := $(OUTPUT)/$(PY_LIB_NAME).so\n",
                "GEN_OBJ_PATHS := $(filter-out $(PY_OBJ_PATH),$(GEN_OBJ_PATHS))\n",
                "ALL_TOP_LEVEL += $(PY_SO)\n",
            ),
            module
        ));
    }

    if let Some(prefix) = &ctx.config.exe_prefix {
        out.push_str(&format!(
            concat!(
                "\n",
                "# --- stuff used for the c++ executables\n",
                "EXE_PREFIX    := {}\n",
                "ALL_EXE_SRC   := $(wildcard $(SRC)/$(EXE_PREFIX)*.cxx)\n",
                "ALL_EXE       := $(notdir $(ALL_EXE_SRC:%.cxx=%))\n",
                "ALL_EXE_PATHS := $(ALL_EXE:%=$(OUTPUT)/%)\n",
                "GEN_OBJ_PATHS := $(filter-out $(BUILD)/$(EXE_PREFIX)%.o,$(GEN_OBJ_PATHS))\n",
                "ALL_TOP_LEVEL += $(ALL_EXE_PATHS)\n",
            ),
            prefix
        ));
    }

    out
}

const PYTHON_LINK_RULE: &str = concat!(
    "\n",
    "# --- python lib rule\n",
    "$(PY_SO): $(PY_OBJ_PATH) $(GEN_OBJ_PATHS)\n",
    "\t@mkdir -p $(OUTPUT)\n",
    "\t@echo \"linking $^ --> $@\"\n",
    "\t@$(CXX) -o $@ $^ $(LIBS) $(LDFLAGS) $(PY_LDFLAGS) -shared\n",
);

const EXE_LINK_RULE: &str = concat!(
    "\n",
    "# --- exe rule\n",
    "$(OUTPUT)/$(EXE_PREFIX)%: $(BUILD)/$(EXE_PREFIX)%.o $(GEN_OBJ_PATHS)\n",
    "\t@mkdir -p $(OUTPUT)\n",
    "\t@echo \"linking $^ --> $@\"\n",
    "\t@$(CXX) -o $@ $^ $(LIBS) $(LDFLAGS)\n",
);

pub fn render_rules(ctx: &RenderContext<'_>) -> String {
    let mut out = format!("{BANNER}# Build Rules\n");

    if ctx.config.python_module.is_some() {
        out.push_str(PYTHON_LINK_RULE);
    }
    if ctx.config.exe_prefix.is_some() {
        out.push_str(EXE_LINK_RULE);
    }

    out
}
