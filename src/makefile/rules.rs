//! Fixed rules: the default goal, object compilation, dependency files and
//! cleanup.

use super::{RenderContext, BANNER};

const ALL_RULE: &str = concat!(
    "\n",
    "# --- first call here\n",
    "all: $(ALL_TOP_LEVEL)\n",
);

const COMPILE_RULE: &str = concat!(
    "\n",
    "# --- compile rule\n",
    "$(BUILD)/%.o: %.cxx\n",
    "\t@echo compiling $<\n",
    "\t@mkdir -p $(BUILD)\n",
    "\t@$(CXX) -c $(CXXFLAGS) $< -o $@\n",
);

// clean and rmdep must not pull in dependency files
const DEPENDENCIES: &str = concat!(
    "# Dependencies and Cleanup\n",
    "\n",
    "# --- use auto dependency generation\n",
    "ALLOBJ       := $(GEN_OBJ)\n",
    "DEP          := $(BUILD)\n",
    "\n",
    "ifneq ($(MAKECMDGOALS),clean)\n",
    "ifneq ($(MAKECMDGOALS),rmdep)\n",
    "include $(ALLOBJ:%.o=$(DEP)/%.d)\n",
    "endif\n",
    "endif\n",
    "\n",
    "DEPTARGSTR = -MT $(BUILD)/$*.o -MT $(DEP)/$*.d\n",
    "$(DEP)/%.d: %.cxx\n",
    "\t@echo making dependencies for $<\n",
    "\t@mkdir -p $(DEP)\n",
    "\t@$(CXX) -MM -MP $(DEPTARGSTR) $(CXXFLAGS) $< -o $@\n",
    "\n",
    "# --- clean\n",
    ".PHONY : clean rmdep all\n",
    "CLEANLIST     = *~ *.o *.o~ *.d core\n",
    "clean:\n",
    "\trm -fr $(CLEANLIST) $(CLEANLIST:%=$(BUILD)/%) $(CLEANLIST:%=$(DEP)/%)\n",
    "\trm -fr $(BUILD) $(OUTPUT)\n",
    "\n",
    "rmdep:\n",
    "\trm -f $(DEP)/*.d\n",
);

pub fn render_all(_ctx: &RenderContext<'_>) -> String {
    ALL_RULE.to_string()
}

pub fn render_compile(_ctx: &RenderContext<'_>) -> String {
    COMPILE_RULE.to_string()
}

pub fn render_dependencies(_ctx: &RenderContext<'_>) -> String {
    format!("{BANNER}{DEPENDENCIES}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_skips_dependency_include() {
        let include = DEPENDENCIES.find("include $(ALLOBJ").unwrap();
        let guard = DEPENDENCIES.find("ifneq ($(MAKECMDGOALS),clean)").unwrap();
        assert!(guard < include);
        assert!(DEPENDENCIES.ends_with("rmdep:\n\trm -f $(DEP)/*.d\n"));
    }
}
